use super::board::Board;
use super::types::{Cell, MapError, Position, MAX_COLS, MAX_ROWS};

fn count_rows(text: &str) -> usize {
    let mut rows = text.bytes().filter(|&b| b == b'\n').count();
    if !text.is_empty() && !text.ends_with('\n') {
        rows += 1;
    }
    rows
}

fn count_cols(text: &str) -> usize {
    text.bytes().take_while(|&b| b != b'\n').count()
}

impl Board {
    /// Parses a map text into a fresh board. Rows are separated by `\n`,
    /// every row must be exactly as long as the first, and the trailing
    /// newline is optional. Error positions are reported 1-based.
    pub fn parse(text: &str) -> Result<Board, MapError> {
        let rows = count_rows(text);
        let cols = count_cols(text);

        if rows == 0 || rows > MAX_ROWS || cols == 0 || cols > MAX_COLS {
            return Err(MapError::InvalidDimensions { rows, cols });
        }

        let mut board = Board::new(rows, cols)?;
        let mut row = 0;
        let mut col = 0;

        for ch in text.chars() {
            if ch == '\n' {
                if col != cols {
                    return Err(MapError::MalformedRow {
                        row: row + 1,
                        col: col + 1,
                    });
                }
                row += 1;
                col = 0;
                continue;
            }

            let cell = Cell::from_char(ch).ok_or(MapError::InvalidCharacter {
                ch,
                row: row + 1,
                col: col + 1,
            })?;

            if col >= cols || row >= rows {
                return Err(MapError::MalformedRow {
                    row: row + 1,
                    col: col + 1,
                });
            }

            board.set(Position::new(row, col), cell)?;
            col += 1;
        }

        if col != 0 && col != cols {
            return Err(MapError::MalformedRow {
                row: row + 1,
                col: col + 1,
            });
        }

        Ok(board)
    }

    /// Exact number of bytes `stringify_into` writes.
    pub fn serialized_len(&self) -> usize {
        self.rows() * (self.cols() + 1) + 1
    }

    /// Serializes the board into `buf`: each row's glyphs followed by `\n`,
    /// then a single NUL terminator. The buffer must hold at least
    /// `serialized_len()` bytes; the bound is exact, not worst-case.
    pub fn stringify_into(&self, buf: &mut [u8]) -> Result<usize, MapError> {
        let required = self.serialized_len();
        if buf.len() < required {
            return Err(MapError::BufferTooSmall {
                required,
                provided: buf.len(),
            });
        }

        let mut at = 0;
        for (pos, cell) in self.cells() {
            buf[at] = cell.to_char() as u8;
            at += 1;
            if pos.col + 1 == self.cols() {
                buf[at] = b'\n';
                at += 1;
            }
        }
        buf[at] = 0;
        Ok(required)
    }

    /// The same serialization as `stringify_into`, minus the NUL terminator.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.rows() * (self.cols() + 1));
        for (pos, cell) in self.cells() {
            text.push(cell.to_char());
            if pos.col + 1 == self.cols() {
                text.push('\n');
            }
        }
        text
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}
