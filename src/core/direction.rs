//! Move directions and their adjacency functions.
//!
//! Each direction maps a cell index to the index of its neighbor on that
//! side, or `None` when the cell sits on the boundary. The engine slides a
//! tile from a cell *into* its neighbor, so `Left` pulls everything toward
//! column 0.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::board::{CELL_COUNT, GRID_WIDTH};
use super::error::BoardError;

/// A direction the player can shift the tiles in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All four directions, in key-code order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Index of the neighbor of `index` in this direction.
    ///
    /// ```
    /// use tile_merge::Direction;
    ///
    /// assert_eq!(Direction::Left.neighbor(5), Some(4));
    /// assert_eq!(Direction::Left.neighbor(4), None);
    /// assert_eq!(Direction::Down.neighbor(11), Some(15));
    /// assert_eq!(Direction::Down.neighbor(12), None);
    /// ```
    #[must_use]
    pub const fn neighbor(self, index: usize) -> Option<usize> {
        if index >= CELL_COUNT {
            return None;
        }
        let column = index % GRID_WIDTH;
        match self {
            Direction::Left if column > 0 => Some(index - 1),
            Direction::Right if column < GRID_WIDTH - 1 => Some(index + 1),
            Direction::Up if index >= GRID_WIDTH => Some(index - GRID_WIDTH),
            Direction::Down if index < CELL_COUNT - GRID_WIDTH => Some(index + GRID_WIDTH),
            _ => None,
        }
    }

    /// Map a DOM-style arrow key code to a direction.
    ///
    /// 37..=40 are left, up, right, down. Everything else is ignored.
    #[must_use]
    pub const fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Direction::Left),
            38 => Some(Direction::Up),
            39 => Some(Direction::Right),
            40 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "up" | "u" => Ok(Direction::Up),
            "right" | "r" => Ok(Direction::Right),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(BoardError::UnknownDirection(s.to_string())),
        }
    }
}
