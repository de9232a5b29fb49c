//! Post use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for post callers (CLI, future surfaces).
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::collection::PostCollection;
use crate::model::post::{Post, PostId};
use crate::repo::post_repo::{PostRepository, RepoResult};

/// Use-case service wrapper for post operations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the live post collection.
    pub fn posts(&self) -> &PostCollection {
        self.repo.all()
    }

    /// Adds one post through repository persistence.
    ///
    /// Write failures come back unchanged from the repository.
    pub fn add_post(&mut self, post: Post) -> RepoResult<()> {
        self.repo.add(post)
    }

    /// Finds the first post with the given id, or `None`.
    pub fn find_by_id(&self, id: PostId) -> Option<&Post> {
        self.repo.find_by_id(id)
    }
}
