//! Post repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide load/query/append APIs over the single backing JSON file.
//! - Keep file-format details inside the store boundary.
//!
//! # Invariants
//! - Construction fully validates the path and loads the whole file before a
//!   repository value is observable; there is no half-initialized state.
//! - `add` mutates memory first, then mirrors the full collection to disk.
//! - Queries never touch the filesystem; they run against the live
//!   in-memory collection.

use crate::model::collection::PostCollection;
use crate::model::post::{Post, PostId};
use crate::store::{self, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for construction and mutation paths.
#[derive(Debug)]
pub enum RepoError {
    /// The supplied path is unusable before any filesystem access (empty).
    Configuration(String),
    /// The backing file does not exist at construction time.
    FileNotFound(PathBuf),
    /// Read, decode, hydration or write failure from the store layer.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(message) => write!(f, "invalid repository path: {message}"),
            Self::FileNotFound(path) => {
                write!(f, "backing file does not exist: {}", path.display())
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configuration(_) => None,
            Self::FileNotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for post query/append operations.
pub trait PostRepository {
    /// Returns the live collection. Callers re-borrowing after an `add` see
    /// the appended post; this is a shared view, not a snapshot.
    fn all(&self) -> &PostCollection;
    /// Appends one post and rewrites the backing file.
    fn add(&mut self, post: Post) -> RepoResult<()>;
    /// Returns the first post whose id equals `id`, or `None`.
    fn find_by_id(&self, id: PostId) -> Option<&Post>;
}

/// JSON-file-backed post repository.
///
/// Owns the backing path and exactly one collection for its whole lifetime.
/// The file is opened and closed per operation; no handle is held between
/// calls, and nothing protects against a second process writing the same
/// file.
#[derive(Debug)]
pub struct JsonPostRepository {
    path: PathBuf,
    posts: PostCollection,
}

impl JsonPostRepository {
    /// Opens a repository over an existing backing file.
    ///
    /// The path is checked before any read: it must be non-empty and refer
    /// to an existing file. The file is then read, decoded and hydrated in
    /// full; any failure aborts construction.
    pub fn open(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(RepoError::Configuration("path is empty".to_string()));
        }
        if !path.is_file() {
            return Err(RepoError::FileNotFound(path));
        }

        let posts = PostCollection::new(store::read_posts(&path)?);
        info!(
            "event=repo_open status=ok path={} posts={}",
            path.display(),
            posts.len()
        );

        Ok(Self { path, posts })
    }

    /// Returns the backing file path this repository was opened over.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PostRepository for JsonPostRepository {
    fn all(&self) -> &PostCollection {
        &self.posts
    }

    fn add(&mut self, post: Post) -> RepoResult<()> {
        let id = post.id;
        self.posts.append(post);
        // The in-memory append is not rolled back on write failure: memory
        // stays the source of truth and the file is only a mirror. The
        // caller sees the I/O error and can retry the flush via another add.
        store::write_posts(&self.path, &self.posts)?;
        info!(
            "event=post_added status=ok id={id} posts={}",
            self.posts.len()
        );
        Ok(())
    }

    fn find_by_id(&self, id: PostId) -> Option<&Post> {
        // Linear scan, first match wins; duplicate ids resolve to the
        // earliest occurrence in file/append order. If lookups ever dominate,
        // the known alternatives are an id-to-post map (O(1) reads, more
        // memory, two structures to keep in sync) or keeping the collection
        // sorted for binary search (slower appends). Neither is worth it at
        // this scale.
        let found = self.posts.iter().find(|post| post.id == id);
        if found.is_none() {
            debug!("event=post_lookup status=miss id={id}");
        }
        found
    }
}
