//! Domain model for post storage.
//!
//! # Responsibility
//! - Define the canonical `Post` record and its wire field names.
//! - Own the ordered in-memory collection the repository serves from.
//!
//! # Invariants
//! - Posts are immutable after construction.
//! - Collection order is load order, then append order.

pub mod collection;
pub mod post;
