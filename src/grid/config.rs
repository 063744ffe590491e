use super::bitboard::BitBoard;
use super::common::Direction;

/// Width and height of the square grid. Coordinates run from `1` to
/// `GRID_SIZE` inclusive on both axes.
pub const GRID_SIZE: u8 = 5;

/// Bitboard type backing the wall set. `u64` leaves room for grids up to 8×8.
pub type WallMap = BitBoard<u64, { GRID_SIZE as usize }>;

const _: () = assert!(
    (GRID_SIZE as usize) * (GRID_SIZE as usize) <= u64::BITS as usize,
    "GRID_SIZE does not fit in the WallMap backing integer"
);

/// All facings in clockwise order starting at north.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// Keyword prefixes recognised by the command parser, including the
/// separating space.
pub const PLACE_ROBOT_PREFIX: &str = "PLACE_ROBOT ";
pub const PLACE_WALL_PREFIX: &str = "PLACE_WALL ";
