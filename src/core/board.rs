//! The 4x4 board model.
//!
//! Cells are stored row-major: index 0 is the top-left corner, index 3 the
//! top-right, index 12 the bottom-left. A value of 0 is an empty cell; any
//! other value is a power of two no smaller than 2.
//!
//! Only the engine mutates a board. Everything public here is read access,
//! plus validated construction for seeding arbitrary positions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::error::{BoardError, Result};

/// Number of columns (and rows) on the board.
pub const GRID_WIDTH: usize = 4;

/// Total number of cells.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_WIDTH;

/// The only value ever spawned onto the board.
pub const SPAWN_VALUE: u32 = 2;

/// Indices of empty cells, in increasing order.
pub type EmptyCells = SmallVec<[usize; CELL_COUNT]>;

/// Fixed-size grid of tile values.
///
/// Deserialization goes through `Board::from_cells`, so a decoded board
/// holds only valid tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: [u32; CELL_COUNT],
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    cells: Vec<u32>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Board::from_cells(&raw.cells)
    }
}

/// True for 0 and for powers of two >= 2.
#[must_use]
pub const fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from row-major cell values.
    ///
    /// ```
    /// use tile_merge::Board;
    ///
    /// let board = Board::from_cells(&[2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]).unwrap();
    /// assert_eq!(board[15], 4);
    /// assert!(Board::from_cells(&[3; 16]).is_err());
    /// ```
    pub fn from_cells(values: &[u32]) -> Result<Self> {
        if values.len() != CELL_COUNT {
            return Err(BoardError::WrongCellCount {
                expected: CELL_COUNT,
                actual: values.len(),
            });
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, &v)| !is_valid_tile(v))
        {
            return Err(BoardError::InvalidTile { index, value });
        }

        let mut cells = [0; CELL_COUNT];
        cells.copy_from_slice(values);
        Ok(Self { cells })
    }

    /// Row-major cell values.
    #[must_use]
    pub const fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Value at `index`, or `None` if the index is off the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.cells.get(index).copied()
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(GRID_WIDTH)
    }

    /// Indices of empty cells in increasing order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// True when every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    /// Sum of all tile values. Moves preserve it; spawns add 2.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board, 0 if empty.
    #[must_use]
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32; CELL_COUNT] {
        &mut self.cells
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.cells[index]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.highest_tile().to_string().len().max(1);
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let labels: Vec<String> = row
                .iter()
                .map(|&v| {
                    let label = if v == 0 { String::new() } else { v.to_string() };
                    format!("{:>width$}", label, width = width)
                })
                .collect();
            write!(f, "{}", labels.join("|"))?;
        }
        Ok(())
    }
}
