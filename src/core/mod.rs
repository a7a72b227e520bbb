//! Core board types: cells, directions, RNG, configuration, errors.
//!
//! This module holds the plain data the engine operates on. Nothing here
//! mutates a board in place; that is the engine's job.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use board::{is_valid_tile, Board, EmptyCells, CELL_COUNT, GRID_WIDTH, SPAWN_VALUE};
pub use config::{EngineConfig, MergeRule};
pub use direction::Direction;
pub use error::{BoardError, Result};
pub use rng::TileRng;
