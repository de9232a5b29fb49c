//! Core domain logic for Inkpost, a single-file JSON post store.
//! This crate is the single source of truth for persistence invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::collection::PostCollection;
pub use model::post::{Post, PostId};
pub use repo::post_repo::{JsonPostRepository, PostRepository, RepoError, RepoResult};
pub use service::post_service::PostService;
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
