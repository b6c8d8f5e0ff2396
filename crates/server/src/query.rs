//! Dataset query surface over persisted episodes.

pub mod handlers;
