//! Grid state: the wall set and the optional robot.
//!
//! Every mutating operation comes in two flavours. The `try_*` methods say
//! why a request was refused; the plain methods collapse that into a `bool`
//! and are what command application uses. Neither flavour panics, and a
//! refused request never changes the board.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use super::common::{BoardError, Direction, Position};
use super::config::{WallMap, GRID_SIZE};
use super::robot::Robot;

/// Plain-data copy of a board, for inspection and simulation output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub robot: Option<Robot>,
    /// Wall cells in row-major order.
    pub walls: Vec<Position>,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    walls: WallMap,
    robot: Option<Robot>,
}

impl Board {
    /// Empty board: no walls, no robot.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff both coordinates are on the grid.
    pub fn is_valid_position(&self, row: i32, col: i32) -> bool {
        Position::in_bounds(row, col)
    }

    pub fn robot(&self) -> Option<Robot> {
        self.robot
    }

    pub fn is_wall(&self, position: Position) -> bool {
        position
            .to_cell()
            .is_some_and(|(r, c)| self.walls.contains(r, c))
    }

    /// Wall positions in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Position> + '_ {
        self.walls.iter().map(Position::from_cell)
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    fn checked_position(row: i32, col: i32) -> Result<Position, BoardError> {
        if Position::in_bounds(row, col) {
            Ok(Position::new(row, col))
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Put the robot at `(row, col)` facing `facing`, discarding any robot
    /// already on the board.
    pub fn try_place_robot(
        &mut self,
        row: i32,
        col: i32,
        facing: Direction,
    ) -> Result<Robot, BoardError> {
        let position = Self::checked_position(row, col)?;
        if self.is_wall(position) {
            return Err(BoardError::WallPresent(position));
        }
        let robot = Robot::new(position, facing);
        self.robot = Some(robot);
        Ok(robot)
    }

    pub fn place_robot(&mut self, row: i32, col: i32, facing: Direction) -> bool {
        self.try_place_robot(row, col, facing).is_ok()
    }

    /// Add a permanent wall at `(row, col)`.
    pub fn try_place_wall(&mut self, row: i32, col: i32) -> Result<Position, BoardError> {
        let position = Self::checked_position(row, col)?;
        if self.robot.is_some_and(|r| r.position == position) {
            return Err(BoardError::RobotPresent(position));
        }
        let (r, c) = position.cell();
        if !self.walls.insert(r, c) {
            return Err(BoardError::WallPresent(position));
        }
        Ok(position)
    }

    pub fn place_wall(&mut self, row: i32, col: i32) -> bool {
        self.try_place_wall(row, col).is_ok()
    }

    /// `row,col,FACING` for the robot, or `None` before the first placement.
    pub fn report(&self) -> Option<String> {
        self.robot.map(|r| r.to_string())
    }

    /// Step the robot one cell forward, wrapping at the edges.
    pub fn try_move_forward(&mut self) -> Result<Position, BoardError> {
        let robot = self.robot.as_mut().ok_or(BoardError::NoRobot)?;
        let next = robot.next_position();
        if next
            .to_cell()
            .is_some_and(|(r, c)| self.walls.contains(r, c))
        {
            return Err(BoardError::Blocked(next));
        }
        robot.position = next;
        Ok(next)
    }

    pub fn move_forward(&mut self) -> bool {
        self.try_move_forward().is_ok()
    }

    fn try_turn(&mut self, turn: fn(Direction) -> Direction) -> Result<Direction, BoardError> {
        let robot = self.robot.as_mut().ok_or(BoardError::NoRobot)?;
        robot.facing = turn(robot.facing);
        Ok(robot.facing)
    }

    /// Rotate the robot a quarter turn counter-clockwise.
    pub fn try_turn_left(&mut self) -> Result<Direction, BoardError> {
        self.try_turn(Direction::left)
    }

    pub fn turn_left(&mut self) -> bool {
        self.try_turn_left().is_ok()
    }

    /// Rotate the robot a quarter turn clockwise.
    pub fn try_turn_right(&mut self) -> Result<Direction, BoardError> {
        self.try_turn(Direction::right)
    }

    pub fn turn_right(&mut self) -> bool {
        self.try_turn_right().is_ok()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("robot", &self.robot)
            .field("walls", &self.walls)
            .finish()
    }
}

/// Grid picture laid out along the movement axes: columns run bottom to
/// top (north is up) and rows run left to right (east is right). `#` marks a
/// wall, `.` a free cell, and the robot is drawn as `^ v > <`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = GRID_SIZE as i32;
        for col in (1..=n).rev() {
            for row in 1..=n {
                let here = Position::new(row, col);
                let ch = match self.robot {
                    Some(r) if r.position == here => match r.facing {
                        Direction::North => '^',
                        Direction::South => 'v',
                        Direction::East => '>',
                        Direction::West => '<',
                    },
                    _ if self.is_wall(here) => '#',
                    _ => '.',
                };
                write!(f, "{}", ch)?;
            }
            if col > 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl From<&Board> for BoardState {
    fn from(board: &Board) -> Self {
        BoardState {
            robot: board.robot,
            walls: board.walls().collect(),
        }
    }
}

/// Rebuilds a board by replaying the snapshot: walls first, then the robot.
/// Entries that would break the board's invariants are dropped.
impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        let mut board = Board::new();
        for wall in state.walls {
            let _ = board.try_place_wall(wall.row, wall.col);
        }
        if let Some(robot) = state.robot {
            let _ = board.try_place_robot(robot.position.row, robot.position.col, robot.facing);
        }
        board
    }
}
