use super::Player;

/// Default board height (rows).
pub const DEFAULT_ROWS: usize = 6;
/// Default board width (columns).
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(Player),
}

/// Errors from attempting to place a piece on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    ColumnFull,
    InvalidColumn,
}

/// The grid itself. Row 0 is the top, row `height - 1` the bottom; pieces
/// stack bottom-up. Once a cell holds a piece it never changes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position. Row 0 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Find the row a piece dropped in `col` would land in: the lowest empty
    /// row, scanning from the bottom up. `None` means the column is full.
    /// Callers must pass `col < width`; the placement path rejects
    /// out-of-range columns before reaching here.
    pub fn find_drop_row(&self, col: usize) -> Option<usize> {
        (0..self.height).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if a column is full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// A rejected drop leaves the board untouched.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, PlaceError> {
        if col >= self.width {
            return Err(PlaceError::InvalidColumn);
        }

        let row = self.find_drop_row(col).ok_or(PlaceError::ColumnFull)?;
        self.cells[row * self.width + col] = Cell::Piece(player);
        Ok(row)
    }

    /// Check if the board is completely full: gravity fills bottom-up, so a
    /// full top row implies every row below it is full too.
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.get(0, col) != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}
