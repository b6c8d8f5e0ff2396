//! Episode recording for completed games.
//!
//! This module assembles the per-move training record of one game: every
//! move with its before/after board states and feature vectors, plus a
//! snapshot of the board after each move. A sealed [`Episode`] is handed to
//! the persistence collaborator exactly once.
//!
//! ## Core Types
//!
//! - [`Episode`] — Complete record of one game
//! - [`Play`] — A single recorded move
//! - [`Snapshot`] — Board state and features after a move
//! - [`Recorder`] — Append-only builder; sealing consumes it
//! - [`EpisodeSink`] — Contract for the persistence collaborator
mod episode;
mod play;
mod recorder;
mod sink;
mod snapshot;

pub use episode::*;
pub use play::*;
pub use recorder::*;
pub use sink::*;
pub use snapshot::*;
