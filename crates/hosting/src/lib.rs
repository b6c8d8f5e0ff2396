//! WebSocket hosting layer.
//!
//! Bridges actix WebSocket connections to the coordinator task: each
//! accepted socket becomes a session with an outbox channel, inbound text
//! frames are decoded into events, and a dropped socket becomes a
//! disconnect event. The coordinator never sees a transport primitive.
//!
//! ## Core Types
//!
//! - [`Gateway`] — Owns the coordinator inbox; one per process
//! - [`handlers`] — The `/ws` upgrade route
mod gateway;
pub mod handlers;

pub use gateway::*;
