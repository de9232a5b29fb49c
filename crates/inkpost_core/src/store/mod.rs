//! JSON backing-file codec.
//!
//! # Responsibility
//! - Read the backing file and hydrate its entries into typed posts.
//! - Encode the full collection and overwrite the file in one write.
//!
//! # Invariants
//! - The file holds a single JSON array of field maps; no envelope, no
//!   version marker.
//! - Decode failures and per-entry hydration failures are typed errors, not
//!   silently defaulted fields.
//! - Writes replace the whole file; there is no partial or incremental path.

use crate::model::collection::PostCollection;
use crate::model::post::Post;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

pub type StoreResult<T> = Result<T, StoreError>;

/// Backing-file read/write error.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure while reading or overwriting the file.
    Io(std::io::Error),
    /// File contents are not a JSON array.
    Decode(serde_json::Error),
    /// One decoded entry could not be turned into a `Post` (missing or
    /// mistyped field). `index` is the entry's position in the array.
    Hydration {
        index: usize,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "backing file is not a valid post list: {err}"),
            Self::Hydration { index, source } => {
                write!(f, "entry {index} in backing file is not a valid post: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Hydration { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Reads the full backing file and hydrates every entry.
///
/// Decoding happens in two phases, so malformed content and bad entries fail
/// differently: the whole document must parse as a JSON array
/// (`StoreError::Decode`), then each element must carry the five required
/// post fields (`StoreError::Hydration` with the offending index).
pub fn read_posts(path: &Path) -> StoreResult<Vec<Post>> {
    let contents = fs::read_to_string(path)?;

    let document: serde_json::Value =
        serde_json::from_str(&contents).map_err(StoreError::Decode)?;
    let entries = match document {
        serde_json::Value::Array(entries) => entries,
        other => {
            return Err(StoreError::Decode(serde::de::Error::custom(format!(
                "expected a JSON array of posts, got {}",
                json_kind(&other)
            ))));
        }
    };

    let mut posts = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let post = serde_json::from_value(entry)
            .map_err(|source| StoreError::Hydration { index, source })?;
        posts.push(post);
    }

    Ok(posts)
}

/// Encodes the full collection and overwrites the backing file.
///
/// The previous contents are fully replaced; output is compact JSON with no
/// key-order guarantee beyond field presence.
pub fn write_posts(path: &Path, posts: &PostCollection) -> StoreResult<()> {
    let encoded = posts.serialize().to_string();
    fs::write(path, encoded)?;
    Ok(())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
