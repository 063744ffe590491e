//! Common types: grid positions, facings and board errors.

use core::fmt;
use core::str::FromStr;

use super::config::GRID_SIZE;

/// A cell on the grid, 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates lie in `[1, GRID_SIZE]`.
    pub fn in_bounds(row: i32, col: i32) -> bool {
        let n = GRID_SIZE as i32;
        (1..=n).contains(&row) && (1..=n).contains(&col)
    }

    /// Zero-based `(row, col)` for bitboard indexing. `None` when off-grid.
    pub(crate) fn to_cell(self) -> Option<(usize, usize)> {
        Self::in_bounds(self.row, self.col).then(|| self.cell())
    }

    /// Zero-based `(row, col)` of a position already known to be on the grid.
    pub(crate) fn cell(self) -> (usize, usize) {
        debug_assert!(Self::in_bounds(self.row, self.col));
        ((self.row - 1) as usize, (self.col - 1) as usize)
    }

    pub(crate) fn from_cell((row, col): (usize, usize)) -> Self {
        Self::new(row as i32 + 1, col as i32 + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Bring a single coordinate back onto the grid after a one-cell step.
fn wrap(coord: i32) -> i32 {
    let n = GRID_SIZE as i32;
    if coord < 1 {
        n
    } else if coord > n {
        1
    } else {
        coord
    }
}

/// Compass facing of the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "UPPERCASE"))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Canonical uppercase name, as used in commands and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        }
    }

    /// Facing after a quarter turn counter-clockwise.
    pub const fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Facing after a quarter turn clockwise.
    pub const fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The cell one step ahead of `from`, wrapped onto the grid.
    ///
    /// North and south move along the column axis, east and west along the
    /// row axis.
    pub fn step(self, from: Position) -> Position {
        let Position { row, col } = from;
        match self {
            Direction::North => Position::new(row, wrap(col + 1)),
            Direction::South => Position::new(row, wrap(col - 1)),
            Direction::East => Position::new(wrap(row + 1), col),
            Direction::West => Position::new(wrap(row - 1), col),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not one of the four canonical direction names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of NORTH, SOUTH, EAST, WEST")
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Exact, case-sensitive match on the canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORTH" => Ok(Direction::North),
            "SOUTH" => Ok(Direction::South),
            "EAST" => Ok(Direction::East),
            "WEST" => Ok(Direction::West),
            _ => Err(ParseDirectionError),
        }
    }
}

/// Reasons a board operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates are outside the grid.
    OutOfBounds { row: i32, col: i32 },
    /// A wall already occupies the cell.
    WallPresent(Position),
    /// The robot stands on the cell.
    RobotPresent(Position),
    /// A wall stands in the cell the robot would move into.
    Blocked(Position),
    /// The operation needs a robot and none has been placed.
    NoRobot,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "position {},{} is off the {}x{} grid", row, col, GRID_SIZE, GRID_SIZE)
            }
            BoardError::WallPresent(p) => write!(f, "wall already at {}", p),
            BoardError::RobotPresent(p) => write!(f, "robot is standing at {}", p),
            BoardError::Blocked(p) => write!(f, "move blocked by wall at {}", p),
            BoardError::NoRobot => write!(f, "no robot has been placed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_edges() {
        assert_eq!(wrap(0), GRID_SIZE as i32);
        assert_eq!(wrap(GRID_SIZE as i32 + 1), 1);
        assert_eq!(wrap(3), 3);
    }

    #[test]
    fn cell_conversion_is_one_based() {
        let p = Position::new(1, GRID_SIZE as i32);
        assert_eq!(p.to_cell(), Some((0, GRID_SIZE as usize - 1)));
        assert_eq!(Position::from_cell((0, 0)), Position::new(1, 1));
        assert_eq!(Position::new(0, 1).to_cell(), None);
        assert_eq!(Position::new(GRID_SIZE as i32, 2).cell(), (GRID_SIZE as usize - 1, 1));
    }
}
