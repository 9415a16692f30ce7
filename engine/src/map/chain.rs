use super::board::Board;
use super::types::{Cell, Direction, MapError, Position};

// Chain traversal. The snake body is a run of direction-tagged cells; each
// tag points at the next cell toward the head. The head is the body cell
// whose tag leads off the board or onto a non-body cell, the tail is the
// body cell no other body cell points at.
impl Board {
    /// Position the body cell at `pos` points at. `Ok(None)` means the tag
    /// leads off the board.
    pub fn chain_next(&self, pos: Position) -> Result<Option<Position>, MapError> {
        let direction = self
            .get(pos)?
            .body_direction()
            .ok_or(MapError::NotASnakeCell {
                row: pos.row,
                col: pos.col,
            })?;

        Ok(direction.step(pos, self.rows(), self.cols()))
    }

    /// The unique neighbor whose own tag points into `pos`. `Ok(None)` means
    /// no body cell precedes `pos` in the chain.
    pub fn chain_prev(&self, pos: Position) -> Result<Option<Position>, MapError> {
        let cell = self.get(pos)?;
        if !cell.is_body() {
            return Err(MapError::NotASnakeCell {
                row: pos.row,
                col: pos.col,
            });
        }

        // A neighbor precedes us if stepping along its own tag lands on us.
        let candidates = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        for towards in candidates {
            let Some(neighbor) = towards.step(pos, self.rows(), self.cols()) else {
                continue;
            };
            if let Some(direction) = self.get(neighbor)?.body_direction()
                && direction.step(neighbor, self.rows(), self.cols()) == Some(pos)
            {
                return Ok(Some(neighbor));
            }
        }

        Ok(None)
    }

    pub fn is_head(&self, pos: Position) -> bool {
        match self.chain_next(pos) {
            Ok(Some(next)) => !self.get(next).is_ok_and(Cell::is_body),
            Ok(None) => true,
            Err(_) => false,
        }
    }

    pub fn is_tail(&self, pos: Position) -> bool {
        matches!(self.chain_prev(pos), Ok(None))
    }

    pub fn find_head(&self) -> Result<Position, MapError> {
        self.find(|board, pos| board.is_head(pos))
            .ok_or(MapError::MissingHeadOrTail)
    }

    pub fn find_tail(&self) -> Result<Position, MapError> {
        self.find(|board, pos| board.is_tail(pos))
            .ok_or(MapError::MissingHeadOrTail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Top row holds `> > v`: tail at (0,0), head at (0,2) whose tag points
    // at the empty cell (1,2).
    fn l_shaped_board() -> Board {
        let mut board = Board::new(3, 3).unwrap();
        board
            .set(Position::new(0, 0), Cell::Body(Direction::Right))
            .unwrap();
        board
            .set(Position::new(0, 1), Cell::Body(Direction::Right))
            .unwrap();
        board
            .set(Position::new(0, 2), Cell::Body(Direction::Down))
            .unwrap();
        board
    }

    #[test]
    fn test_chain_next_follows_tag() {
        let board = l_shaped_board();
        assert_eq!(
            board.chain_next(Position::new(0, 0)).unwrap(),
            Some(Position::new(0, 1))
        );
        assert_eq!(
            board.chain_next(Position::new(0, 2)).unwrap(),
            Some(Position::new(1, 2))
        );
    }

    #[test]
    fn test_chain_next_off_board() {
        let mut board = Board::new(2, 2).unwrap();
        board
            .set(Position::new(0, 0), Cell::Body(Direction::Up))
            .unwrap();
        assert_eq!(board.chain_next(Position::new(0, 0)).unwrap(), None);
    }

    #[test]
    fn test_chain_next_rejects_non_body() {
        let board = Board::new(2, 2).unwrap();
        assert!(matches!(
            board.chain_next(Position::new(0, 0)),
            Err(MapError::NotASnakeCell { row: 0, col: 0 })
        ));
        assert!(matches!(
            board.chain_next(Position::new(5, 5)),
            Err(MapError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_chain_prev_finds_unique_predecessor() {
        let board = l_shaped_board();
        assert_eq!(
            board.chain_prev(Position::new(0, 1)).unwrap(),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            board.chain_prev(Position::new(0, 2)).unwrap(),
            Some(Position::new(0, 1))
        );
        assert_eq!(board.chain_prev(Position::new(0, 0)).unwrap(), None);
    }

    #[test]
    fn test_head_and_tail_detection() {
        let board = l_shaped_board();
        assert!(board.is_head(Position::new(0, 2)));
        assert!(!board.is_head(Position::new(0, 0)));
        assert!(board.is_tail(Position::new(0, 0)));
        assert!(!board.is_tail(Position::new(0, 1)));

        // Non-body cells are neither.
        assert!(!board.is_head(Position::new(2, 2)));
        assert!(!board.is_tail(Position::new(2, 2)));
    }

    #[test]
    fn test_find_head_and_tail() {
        let board = l_shaped_board();
        assert_eq!(board.find_head().unwrap(), Position::new(0, 2));
        assert_eq!(board.find_tail().unwrap(), Position::new(0, 0));
    }

    #[test]
    fn test_find_head_fails_without_snake() {
        let board = Board::new(3, 3).unwrap();
        assert!(matches!(board.find_head(), Err(MapError::MissingHeadOrTail)));
        assert!(matches!(board.find_tail(), Err(MapError::MissingHeadOrTail)));
    }

    #[test]
    fn test_single_cell_snake_is_head_and_tail() {
        let mut board = Board::new(3, 3).unwrap();
        let pos = Position::new(1, 1);
        board.set(pos, Cell::Body(Direction::Right)).unwrap();
        assert!(board.is_head(pos));
        assert!(board.is_tail(pos));
    }
}
