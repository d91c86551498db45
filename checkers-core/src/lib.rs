//! Checkers Core - rules engine
//!
//! This crate owns the rules of the 8x8 checkers variant:
//! - Board geometry and the starting layout
//! - Single-step move and capture validation
//! - Forced-capture policy and king promotion
//! - Win / stalemate detection
//!
//! It performs no I/O; front ends drive it through [`Engine::play`] and
//! render [`Snapshot`]s.

pub mod board;
pub mod error;
pub mod game;
pub mod ruleset;

// Re-exports for convenient access
pub use board::{Board, Cell, Color, Coord, Piece, BOARD_SIZE, DIAGONALS};
pub use error::{CaptureError, MoveError, PlyError};
pub use game::{Command, Engine, GameState, MoveState, Player, Snapshot};
pub use ruleset::RuleSet;
