//! Room lifecycle and game-state synchronization engine.
//!
//! This crate owns the authoritative state of every live game: it matches
//! two sessions into a room, enforces turn order and move legality through
//! the board model, drives the episode recorder, and hands finished
//! episodes to the persistence collaborator.
//!
//! ## Architecture
//!
//! - [`Coordinator`] — Single-task event loop; sole writer of room state
//! - [`Registry`] — Owns the room-code → [`Room`] mapping
//! - [`Room`] — Two seats, a board, and an episode recorder
//! - [`SessionRef`] — Opaque capability for one connected client
//!
//! ## Protocol
//!
//! - [`ClientMessage`] / [`ServerMessage`] — JSON wire format
//! - [`Protocol`] — Decoding of inbound frames
//! - [`Event`] — Internal events, including transport disconnects
//!
//! All events for all rooms are processed to completion, one at a time, on
//! the coordinator task; board invariants hold without locking. The only
//! work that outlives an event is the fire-and-forget episode hand-off.
mod coordinator;
mod error;
mod event;
mod message;
mod protocol;
mod registry;
mod room;
mod session;

pub use coordinator::*;
pub use error::*;
pub use event::*;
pub use message::*;
pub use protocol::*;
pub use registry::*;
pub use room::*;
pub use session::*;
