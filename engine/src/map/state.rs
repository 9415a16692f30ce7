use std::path::Path;

use crate::log;
use crate::rng::GameRng;

use super::board::Board;
use super::file_io::read_map_file;
use super::types::{Cell, Direction, MapError, Position, TickOutcome, MAX_MAP_TEXT};

/// A board together with the cached facts one tick needs: where the head and
/// tail are and which way the head points. The caches are derived once by a
/// full chain walk and maintained incrementally afterwards; the board behind
/// them is never handed out mutably, so the single-chain invariant holds for
/// the lifetime of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    board: Board,
    head: Position,
    tail: Position,
    direction: Direction,
}

impl Map {
    /// Validates that `board` carries exactly one contiguous, acyclic snake
    /// chain and derives the head/tail caches from it.
    pub fn from_board(board: Board) -> Result<Self, MapError> {
        let tail = board.find_tail()?;
        let body_cells = board.count_cells(Cell::is_body);

        // Walk tail -> head. Anything the walk cannot reach (a second chain,
        // a loop) leaves the visited count short of the body-cell count.
        let mut at = tail;
        let mut visited = 1;
        while !board.is_head(at) {
            if visited > body_cells {
                // A side chain feeding into a loop never reaches a head.
                return Err(MapError::MissingHeadOrTail);
            }
            // Not the head, so the tag continues onto another body cell.
            at = board
                .chain_next(at)?
                .expect("non-head body cell continues on the board");
            visited += 1;
        }

        if visited != body_cells {
            return Err(MapError::MissingHeadOrTail);
        }

        let head = at;
        let direction = board
            .get(head)?
            .body_direction()
            .ok_or(MapError::MissingHeadOrTail)?;

        Ok(Self {
            board,
            head,
            tail,
            direction,
        })
    }

    pub fn parse(text: &str) -> Result<Self, MapError> {
        Self::from_board(Board::parse(text)?)
    }

    pub fn parse_file(path: &Path) -> Result<Self, MapError> {
        let text = read_map_file(path, MAX_MAP_TEXT)?;
        Self::parse(&text)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn tail(&self) -> Position {
        self.tail
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Points the head in a new direction. Rejected with `InvalidReversal`
    /// when the new heading would step straight onto the head's predecessor,
    /// leaving the map untouched. Changes between two ticks are not buffered:
    /// the latest successful call wins.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), MapError> {
        let prev = self
            .board
            .chain_prev(self.head)
            .expect("cached head must be a body cell");

        let next = direction.step(self.head, self.rows(), self.cols());
        if next.is_some() && next == prev {
            return Err(MapError::InvalidReversal);
        }

        self.board
            .set(self.head, Cell::Body(direction))
            .expect("cached head must be on the board");
        self.direction = direction;
        Ok(())
    }

    /// One simulation tick. Head growth and tail shrink commit together; on
    /// `Dead` the map is left exactly as it was.
    pub fn advance(&mut self) -> TickOutcome {
        let Some(next) = self.direction.step(self.head, self.rows(), self.cols()) else {
            log!("Snake hit the boundary at ({}, {})", self.head.row, self.head.col);
            return TickOutcome::Dead;
        };

        let outcome = match self.board.get(next).expect("step stays on the board") {
            Cell::Space => TickOutcome::Idle,
            Cell::Food => TickOutcome::Eating,
            Cell::Wall | Cell::Body(_) => {
                log!("Snake died at ({}, {})", next.row, next.col);
                return TickOutcome::Dead;
            }
        };

        // The head grows into the new cell, continuing the chain.
        let head_cell = self
            .board
            .get(self.head)
            .expect("cached head must be on the board");
        self.board
            .set(next, head_cell)
            .expect("step stays on the board");

        if outcome == TickOutcome::Eating {
            log!("Snake ate food at ({}, {})", next.row, next.col);
        } else {
            let new_tail = self
                .board
                .chain_next(self.tail)
                .expect("cached tail must be a body cell")
                .expect("tail of a validated chain points inside the board");
            self.board
                .set(self.tail, Cell::Space)
                .expect("cached tail must be on the board");
            self.tail = new_tail;
        }

        self.head = next;
        outcome
    }

    /// Converts one uniformly chosen empty cell to food. Two passes: count
    /// the empty cells, then walk to the picked offset. O(rows * cols), fine
    /// for capacity-bounded boards.
    pub fn spawn_food(&mut self, rng: &mut GameRng) -> Result<Position, MapError> {
        let spaces = self.board.count_cells(|cell| cell == Cell::Space);
        if spaces == 0 {
            return Err(MapError::NoSpaceAvailable);
        }

        let offset = rng.random_range(0..spaces);
        let pos = self
            .board
            .cells()
            .filter(|&(_, cell)| cell == Cell::Space)
            .nth(offset)
            .map(|(pos, _)| pos)
            .expect("offset was drawn below the space count");

        self.board.set(pos, Cell::Food)?;
        log!("Food spawned at ({}, {})", pos.row, pos.col);
        Ok(pos)
    }
}

impl std::fmt::Display for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.board.fmt(f)
    }
}
