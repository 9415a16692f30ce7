mod board;
mod chain;
mod file_io;
mod parse;
mod state;
mod types;

pub use board::Board;
pub use file_io::read_map_file;
pub use state::Map;
pub use types::{
    Cell, Direction, MapError, Position, TickOutcome, MAX_COLS, MAX_MAP_TEXT, MAX_ROWS,
};
