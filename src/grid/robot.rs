//! The single robot that can occupy the board.

use core::fmt;

use super::common::{Direction, Position};

/// Robot location and facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    pub position: Position,
    pub facing: Direction,
}

impl Robot {
    pub const fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing }
    }

    /// Where the robot would end up after one step forward.
    pub fn next_position(&self) -> Position {
        self.facing.step(self.position)
    }
}

/// Status line in `row,col,FACING` form.
impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.position, self.facing)
    }
}
