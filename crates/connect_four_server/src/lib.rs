//! Connect Four game service.
//!
//! This crate is the session coordinator around the pure engine in
//! `connect_four`:
//!
//! - **Store**: in-memory registry mapping opaque game identifiers to live
//!   games, serializing access per game and sequencing the chained computer
//!   reply.
//! - **API**: JSON-over-HTTP routes for creating games, reading snapshots,
//!   and making moves.
//!
//! State is volatile: games live for the process lifetime only.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod store;

// Crate-level exports - API surface
pub use api::{ApiError, CreateGameRequest, GameSnapshot, MoveRequest, Winner, router};

// Crate-level exports - Game store
pub use store::{GameId, GameStore, StoreError};

// Crate-level exports - Engine types used on the wire
pub use connect_four::{COLS, OpponentType, ROWS};
