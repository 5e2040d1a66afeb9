//! The 4×4 board.
//!
//! A `Board` is a small `Copy` value holding one `u32` per cell, row-major,
//! with `0` meaning empty. Every populated cell is a power of two between 2
//! and `MAX_TILE`; the checked constructors and `Deserialize` reject
//! anything else.
//!
//! ## Geometry
//!
//! Row 0 is the top of the board, column 0 the left edge. `rotate_ccw`
//! turns the board a quarter turn counter-clockwise, so the top row becomes
//! the left column. This is the single rotation the move logic relies on.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{BOARD_SIZE, CELL_COUNT, MAX_TILE};
use super::error::{EngineError, EngineResult};

/// Row-major cell grid.
pub type Cells = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// A board position: `(row, col)`.
pub type Position = (usize, usize);

/// The game board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Cells", into = "Cells")]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// A board with no tiles.
    pub const EMPTY: Board = Board {
        cells: [[0; BOARD_SIZE]; BOARD_SIZE],
    };

    /// Create an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Create a board from rows, validating every cell.
    pub fn from_rows(cells: Cells) -> EngineResult<Self> {
        for (row, line) in cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                check_cell(value, (row, col))?;
            }
        }
        Ok(Self { cells })
    }

    /// Create a board from dynamically sized rows.
    ///
    /// Rejects the wrong number of rows or cells per row before validating
    /// tile values.
    pub fn from_nested<R: AsRef<[u32]>>(rows: &[R]) -> EngineResult<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::RowCount {
                found: rows.len(),
                expected: BOARD_SIZE,
            });
        }

        let mut cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != BOARD_SIZE {
                return Err(EngineError::RowLength {
                    row,
                    found: line.len(),
                    expected: BOARD_SIZE,
                });
            }
            cells[row].copy_from_slice(line);
        }
        Self::from_rows(cells)
    }

    /// Create a board from a row-major flat slice of `CELL_COUNT` values.
    pub fn from_flat(values: &[u32]) -> EngineResult<Self> {
        if values.len() != CELL_COUNT {
            return Err(EngineError::CellCount {
                found: values.len(),
                expected: CELL_COUNT,
            });
        }

        let mut cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, chunk) in values.chunks_exact(BOARD_SIZE).enumerate() {
            cells[row].copy_from_slice(chunk);
        }
        Self::from_rows(cells)
    }

    /// Borrow the rows.
    #[must_use]
    pub fn rows(&self) -> &Cells {
        &self.cells
    }

    /// Row-major flat copy of the cells.
    #[must_use]
    pub fn to_flat(&self) -> [u32; CELL_COUNT] {
        let mut flat = [0; CELL_COUNT];
        for (row, line) in self.cells.iter().enumerate() {
            flat[row * BOARD_SIZE..(row + 1) * BOARD_SIZE].copy_from_slice(line);
        }
        flat
    }

    /// Get a cell value. Panics if out of bounds.
    #[must_use]
    pub fn get(&self, (row, col): Position) -> u32 {
        self.cells[row][col]
    }

    /// Place a value in a cell.
    ///
    /// Callers inside the crate only ever write 0 or a spawned/merged tile.
    pub(crate) fn set(&mut self, (row, col): Position, value: u32) {
        debug_assert!(is_valid_cell(value));
        self.cells[row][col] = value;
    }

    /// Replace a whole row.
    pub(crate) fn set_row(&mut self, row: usize, line: [u32; BOARD_SIZE]) {
        self.cells[row] = line;
    }

    // === Queries ===

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Position; CELL_COUNT]> {
        let mut empty = SmallVec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    /// Number of populated cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Largest tile on the board (0 for an empty board).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// True if two 4-connected neighbours hold the same mergeable tile.
    ///
    /// Pairs of `MAX_TILE` do not count.
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.cells[row][col];
                if value == 0 || value >= MAX_TILE {
                    continue;
                }
                if col + 1 < BOARD_SIZE && self.cells[row][col + 1] == value {
                    return true;
                }
                if row + 1 < BOARD_SIZE && self.cells[row + 1][col] == value {
                    return true;
                }
            }
        }
        false
    }

    // === Transforms ===

    /// Rotate a quarter turn counter-clockwise.
    #[must_use]
    pub fn rotate_ccw(&self) -> Self {
        let mut cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                cells[BOARD_SIZE - 1 - col][row] = value;
            }
        }
        Self { cells }
    }

    /// Rotate `turns` quarter turns counter-clockwise.
    #[must_use]
    pub fn rotate_ccw_by(&self, turns: usize) -> Self {
        (0..turns % 4).fold(*self, |board, _| board.rotate_ccw())
    }

    /// Mirror left-to-right.
    #[must_use]
    pub fn mirror_horizontal(&self) -> Self {
        let mut cells = self.cells;
        for line in &mut cells {
            line.reverse();
        }
        Self { cells }
    }

    /// Mirror top-to-bottom.
    #[must_use]
    pub fn mirror_vertical(&self) -> Self {
        let mut cells = self.cells;
        cells.reverse();
        Self { cells }
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                cells[col][row] = value;
            }
        }
        Self { cells }
    }
}

/// Check a cell value: 0, or a power of two in `2..=MAX_TILE`.
pub fn check_cell(value: u32, (row, col): Position) -> EngineResult<()> {
    if is_valid_cell(value) {
        Ok(())
    } else {
        Err(EngineError::InvalidTile { row, col, value })
    }
}

fn is_valid_cell(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

impl TryFrom<Cells> for Board {
    type Error = EngineError;

    fn try_from(cells: Cells) -> Result<Self, Self::Error> {
        Self::from_rows(cells)
    }
}

impl From<Board> for Cells {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.cells).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for (row, line) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &value) in line.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", value, width = width)?;
                }
            }
        }
        Ok(())
    }
}
