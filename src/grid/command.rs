//! Text commands and their application to a [`Board`].
//!
//! Parsing is a pure function of the input line. It checks syntax (and the
//! robot placement range) but never looks at a board, so the same line
//! always yields the same command.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use super::board::Board;
use super::common::{BoardError, Direction, Position};
use super::config::{PLACE_ROBOT_PREFIX, PLACE_WALL_PREFIX};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlaceRobot {
        row: i32,
        col: i32,
        facing: Direction,
    },
    PlaceWall {
        row: i32,
        col: i32,
    },
    Move,
    Left,
    Right,
    Report,
}

/// The line is not a well-formed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCommandError;

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised command")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCommandError {}

/// Parse a line into a command. `None` means the line should be ignored.
pub fn parse(line: &str) -> Option<Command> {
    line.parse().ok()
}

/// Integer field, tolerating surrounding whitespace and a leading sign.
fn parse_coord(field: &str) -> Result<i32, ParseCommandError> {
    field.trim().parse().map_err(|_| ParseCommandError)
}

fn parse_place_robot(args: &str) -> Result<Command, ParseCommandError> {
    let mut fields = args.split(',');
    let (Some(row), Some(col), Some(facing), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseCommandError);
    };
    let row = parse_coord(row)?;
    let col = parse_coord(col)?;
    let facing: Direction = facing.parse().map_err(|_| ParseCommandError)?;
    // The board checks this again when the command is applied.
    if !Position::in_bounds(row, col) {
        return Err(ParseCommandError);
    }
    Ok(Command::PlaceRobot { row, col, facing })
}

fn parse_place_wall(args: &str) -> Result<Command, ParseCommandError> {
    let mut fields = args.split(',');
    let (Some(row), Some(col), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParseCommandError);
    };
    Ok(Command::PlaceWall {
        row: parse_coord(row)?,
        col: parse_coord(col)?,
    })
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if let Some(args) = line.strip_prefix(PLACE_ROBOT_PREFIX) {
            return parse_place_robot(args);
        }
        if let Some(args) = line.strip_prefix(PLACE_WALL_PREFIX) {
            return parse_place_wall(args);
        }
        match line {
            "MOVE" => Ok(Command::Move),
            "LEFT" => Ok(Command::Left),
            "RIGHT" => Ok(Command::Right),
            "REPORT" => Ok(Command::Report),
            _ => Err(ParseCommandError),
        }
    }
}

/// Canonical text form; parsing it yields the same command.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PlaceRobot { row, col, facing } => {
                write!(f, "{}{},{},{}", PLACE_ROBOT_PREFIX, row, col, facing)
            }
            Command::PlaceWall { row, col } => write!(f, "{}{},{}", PLACE_WALL_PREFIX, row, col),
            Command::Move => f.write_str("MOVE"),
            Command::Left => f.write_str("LEFT"),
            Command::Right => f.write_str("RIGHT"),
            Command::Report => f.write_str("REPORT"),
        }
    }
}

impl Command {
    /// Run the command against `board`. Only `Report` produces anything;
    /// refusals of the other commands are silent.
    pub fn apply(&self, board: &mut Board) -> Option<String> {
        match *self {
            Command::PlaceRobot { row, col, facing } => {
                board.place_robot(row, col, facing);
            }
            Command::PlaceWall { row, col } => {
                board.place_wall(row, col);
            }
            Command::Move => {
                board.move_forward();
            }
            Command::Left => {
                board.turn_left();
            }
            Command::Right => {
                board.turn_right();
            }
            Command::Report => return board.report(),
        }
        None
    }

    /// Like [`Command::apply`], but keeps the reason for a refusal.
    pub fn try_apply(&self, board: &mut Board) -> Result<Option<String>, BoardError> {
        match *self {
            Command::PlaceRobot { row, col, facing } => {
                board.try_place_robot(row, col, facing).map(|_| None)
            }
            Command::PlaceWall { row, col } => board.try_place_wall(row, col).map(|_| None),
            Command::Move => board.try_move_forward().map(|_| None),
            Command::Left => board.try_turn_left().map(|_| None),
            Command::Right => board.try_turn_right().map(|_| None),
            Command::Report => Ok(board.report()),
        }
    }
}
