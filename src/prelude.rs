//! Commonly used types and utilities for ease of import.

pub use crate::{parse, Board, Command, Direction, Position, Robot, GRID_SIZE};

#[cfg(feature = "std")]
pub use crate::{RunSummary, Session};
