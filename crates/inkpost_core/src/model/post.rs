//! Post domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the backing JSON file.
//! - Keep the wire field names (`authorId` etc.) in one place.
//!
//! # Invariants
//! - A `Post` is never mutated after construction; there is no update path.
//! - `id` is caller-assigned and NOT guaranteed unique by this layer.
//! - `date` and `slug` are opaque pass-through values, not validated here.

use serde::{Deserialize, Serialize};

/// Identifier for a stored post.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Comparison is strict `i64` equality; uniqueness is the caller's problem.
pub type PostId = i64;

/// One stored blog-post-like record.
///
/// All five fields are required on deserialize; an entry missing any of them
/// is rejected during hydration instead of being defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Caller-assigned identifier. Duplicates are permitted and undetected.
    pub id: PostId,
    /// Publication date, carried unchanged as opaque text.
    pub date: String,
    /// Serialized as `authorId` to match the on-disk format.
    #[serde(rename = "authorId")]
    pub author_id: i64,
    /// Post title.
    pub title: String,
    /// Human-readable identifier. Not checked for uniqueness or URL safety.
    pub slug: String,
}

impl Post {
    /// Creates a post from caller-provided field values.
    pub fn new(
        id: PostId,
        date: impl Into<String>,
        author_id: i64,
        title: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            author_id,
            title: title.into(),
            slug: slug.into(),
        }
    }
}
