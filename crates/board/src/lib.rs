//! Board model for the cat-and-mouse game.
//!
//! Pure rules of the game: piece placement, move legality, and victory
//! detection on the dark squares of an 8x8 board. Nothing in this crate
//! holds mutable state of its own; [`GameState`] values are cloned on
//! mutation so stored history never aliases live state.
//!
//! ## Core Types
//!
//! - [`Position`] — A square on the board
//! - [`Piece`] — The mouse or one of the four cats
//! - [`Side`] — The two seats, mouse and cats
//! - [`GameState`] — Full game state with turn and winner
//! - [`Features`] — Fixed-shape numeric summary for training records
mod features;
mod piece;
mod position;
mod side;
mod state;

pub use features::*;
pub use piece::*;
pub use position::*;
pub use side::*;
pub use state::*;
