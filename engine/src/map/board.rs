use super::types::{Cell, MapError, Position, MAX_COLS, MAX_ROWS};

/// Raw grid storage. The snake chain is encoded directly in the cells as
/// direction tags; there is no separate body list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MapError> {
        if rows == 0 || rows > MAX_ROWS || cols == 0 || cols > MAX_COLS {
            return Err(MapError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Space; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Position) -> Result<Cell, MapError> {
        if !self.in_bounds(pos) {
            return Err(MapError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(self.cells[pos.row * self.cols + pos.col])
    }

    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), MapError> {
        if !self.in_bounds(pos) {
            return Err(MapError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[pos.row * self.cols + pos.col] = cell;
        Ok(())
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &cell)| {
            (Position::new(i / self.cols, i % self.cols), cell)
        })
    }

    /// First position, in row-major order, satisfying the predicate.
    pub fn find<F>(&self, predicate: F) -> Option<Position>
    where
        F: Fn(&Board, Position) -> bool,
    {
        self.cells()
            .map(|(pos, _)| pos)
            .find(|&pos| predicate(self, pos))
    }

    pub fn count_cells<F>(&self, predicate: F) -> usize
    where
        F: Fn(Cell) -> bool,
    {
        self.cells().filter(|&(_, cell)| predicate(cell)).count()
    }
}
