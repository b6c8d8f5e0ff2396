//! Authoritative server for the cat-and-mouse board game.
//!
//! This facade crate re-exports all public mousetrap crates for
//! convenient access.
//!
//! ## Crate Organization
//!
//! ### Core Types
//! - [`core`] — Type aliases, constants, and shared traits
//! - [`board`] — Board geometry, legality, and victory rules
//!
//! ### Domain Logic
//! - [`records`] — Per-move episode recording for training
//! - [`gameroom`] — Room lifecycle and turn arbitration
//!
//! ### Infrastructure
//! - [`database`] — Episode persistence and dataset queries
//! - [`hosting`] — WebSocket bridging
//! - [`server`] — Unified backend

pub use mt_board    as board;
pub use mt_core     as core;
pub use mt_database as database;
pub use mt_gameroom as gameroom;
pub use mt_hosting  as hosting;
pub use mt_records  as records;
pub use mt_server   as server;
