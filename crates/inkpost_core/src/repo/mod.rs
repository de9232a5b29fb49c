//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the post data-access contract.
//! - Isolate backing-file details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`Configuration`,
//!   `FileNotFound`) in addition to store transport errors.
//! - Lookups are answered from memory; only `add` reaches the filesystem.

pub mod post_repo;
