pub mod logger;
pub mod map;
pub mod rng;

pub use map::{
    Board, Cell, Direction, Map, MapError, Position, TickOutcome, MAX_COLS, MAX_MAP_TEXT,
    MAX_ROWS,
};
pub use rng::GameRng;
