//! Grid state machine and command parser (no_std compatible)
//!
//! Grid state, movement rules and the command parser. Nothing in here does
//! I/O or logging; it needs only `alloc` for report strings and snapshots.

pub mod bitboard;
pub mod board;
pub mod command;
pub mod common;
pub mod config;
pub mod robot;

// Re-export commonly used types
pub use bitboard::BitBoard;
pub use board::{Board, BoardState};
pub use command::{parse, Command, ParseCommandError};
pub use common::{BoardError, Direction, ParseDirectionError, Position};
pub use config::*;
pub use robot::Robot;
