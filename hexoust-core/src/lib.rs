//! HexOust core - rule engine
//!
//! This crate provides the core game logic for HexOust:
//! - Board geometry (hex grid with cube coordinates)
//! - Connected stone group detection
//! - Placement legality and capture resolution
//! - Turn alternation, auto-pass, and win detection
//!
//! The engine is synchronous and single-threaded; every public operation
//! runs to completion, and rejected moves never change any state. Rendering,
//! input, and timers belong to the caller.

pub mod board;
pub mod game;
pub mod group;
pub mod rules;

// Re-exports for convenient access
pub use board::{Board, Hex, BOARD_RADIUS, DIRECTIONS};
pub use game::{Game, Player, Snapshot};
pub use group::{group_at, group_with, Group};
pub use rules::{IllegalMove, MoveOutcome};
