use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const MAX_ROWS: usize = 100;
pub const MAX_COLS: usize = 100;

/// Largest map text the engine will read from disk: every row at full
/// capacity plus its line break, plus a terminator byte.
pub const MAX_MAP_TEXT: usize = (MAX_COLS + 1) * MAX_ROWS + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// One step from `pos` within a `rows` x `cols` board. `None` means the
    /// step would leave the board.
    pub fn step(&self, pos: Position, rows: usize, cols: usize) -> Option<Position> {
        let next = match self {
            Direction::Up => {
                if pos.row == 0 {
                    return None;
                }
                Position::new(pos.row - 1, pos.col)
            }
            Direction::Down => Position::new(pos.row + 1, pos.col),
            Direction::Left => {
                if pos.col == 0 {
                    return None;
                }
                Position::new(pos.row, pos.col - 1)
            }
            Direction::Right => Position::new(pos.row, pos.col + 1),
        };

        if next.row >= rows || next.col >= cols {
            return None;
        }
        Some(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Space,
    Wall,
    Food,
    Body(Direction),
}

impl Cell {
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            ' ' => Some(Cell::Space),
            '=' => Some(Cell::Wall),
            '*' => Some(Cell::Food),
            '^' => Some(Cell::Body(Direction::Up)),
            'v' => Some(Cell::Body(Direction::Down)),
            '<' => Some(Cell::Body(Direction::Left)),
            '>' => Some(Cell::Body(Direction::Right)),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Space => ' ',
            Cell::Wall => '=',
            Cell::Food => '*',
            Cell::Body(Direction::Up) => '^',
            Cell::Body(Direction::Down) => 'v',
            Cell::Body(Direction::Left) => '<',
            Cell::Body(Direction::Right) => '>',
        }
    }

    pub fn is_body(self) -> bool {
        matches!(self, Cell::Body(_))
    }

    pub fn body_direction(self) -> Option<Direction> {
        match self {
            Cell::Body(direction) => Some(direction),
            _ => None,
        }
    }
}

/// Result of one simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    Dead,
    Idle,
    Eating,
}

#[derive(Debug)]
pub enum MapError {
    InvalidDimensions { rows: usize, cols: usize },
    /// Row/col are 1-based, for diagnostics.
    MalformedRow { row: usize, col: usize },
    InvalidCharacter { ch: char, row: usize, col: usize },
    MissingHeadOrTail,
    BufferTooSmall { required: usize, provided: usize },
    InvalidReversal,
    OutOfBounds { row: usize, col: usize },
    NotASnakeCell { row: usize, col: usize },
    NoSpaceAvailable,
    NotARegularFile(PathBuf),
    Io(std::io::Error),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid map dimensions: {}x{}", rows, cols)
            }
            MapError::MalformedRow { row, col } => {
                write!(f, "Malformed row at ({}, {})", row, col)
            }
            MapError::InvalidCharacter { ch, row, col } => {
                write!(f, "Invalid character {:?} at ({}, {})", ch, row, col)
            }
            MapError::MissingHeadOrTail => {
                write!(f, "Map does not contain a single well-formed snake")
            }
            MapError::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {} bytes, provided {}",
                    required, provided
                )
            }
            MapError::InvalidReversal => {
                write!(f, "Direction change would reverse the snake into itself")
            }
            MapError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            MapError::NotASnakeCell { row, col } => {
                write!(f, "Cell at ({}, {}) is not a snake body cell", row, col)
            }
            MapError::NoSpaceAvailable => {
                write!(f, "No empty cell left to place food on")
            }
            MapError::NotARegularFile(path) => {
                write!(f, "{} is not a regular file", path.display())
            }
            MapError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for MapError {}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::Io(e)
    }
}
