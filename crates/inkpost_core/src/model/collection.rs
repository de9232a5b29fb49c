//! In-memory post collection.
//!
//! # Responsibility
//! - Own the ordered sequence of posts loaded from the backing file.
//! - Produce the plain list-of-maps form that gets encoded to disk.
//!
//! # Invariants
//! - Order is file order at load time, then append order afterwards.
//! - During the process lifetime this sequence is the source of truth; the
//!   backing file is a mirror refreshed after each mutation.
//! - No id uniqueness is enforced; duplicate ids are kept as-is.

use crate::model::post::Post;
use serde_json::Value;

/// Ordered, append-only-in-practice sequence of posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostCollection {
    posts: Vec<Post>,
}

impl PostCollection {
    /// Wraps an already-hydrated sequence, preserving its order.
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Appends one post to the end of the sequence. In-memory only; the
    /// caller decides when the backing file gets rewritten.
    pub fn append(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Produces the plain JSON array form, one field map per post in current
    /// order. Pure read; does not touch collection state.
    pub fn serialize(&self) -> Value {
        // Post's serde derive cannot fail on these field types.
        serde_json::to_value(&self.posts).unwrap_or(Value::Array(Vec::new()))
    }

    /// Forward iteration in current order. A fresh call reflects appends made
    /// since the last one.
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl<'a> IntoIterator for &'a PostCollection {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}
