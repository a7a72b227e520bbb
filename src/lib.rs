//! # tile-merge
//!
//! A single-player tile-merging puzzle on a fixed 4x4 grid.
//!
//! The player shifts every tile in one of four directions; equal neighbors
//! merge, and a new 2 spawns after each move that changed the board.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: Each `BoardEngine` owns its board and RNG. No globals,
//!    so any number of games can run side by side.
//!
//! 2. **Total Operations**: `reset`, `spawn_tile` and `move_tiles` never fail.
//!    "Board full" and "nothing moved" come back as `false`.
//!
//! 3. **Deterministic When Seeded**: Spawn positions come from a seeded
//!    ChaCha8 stream, so a seed plus a move list replays a game exactly.
//!
//! ## Move Semantics
//!
//! A move runs repeated passes over cells 0..16 in increasing index order,
//! whatever the direction. Each cell pushes its tile into its neighbor in
//! the move direction: merging with an equal tile, or sliding into an empty
//! cell. Passes repeat until one changes nothing. See `MergeRule` for
//! whether a freshly merged tile may merge again.
//!
//! ## Modules
//!
//! - `core`: Board, directions, RNG, configuration, errors
//! - `engine`: The move/merge/spawn engine
//! - `session`: Startup/move/restart sequencing and tile styling for front ends
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod engine;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, Direction, EngineConfig, MergeRule, TileRng,
    CELL_COUNT, GRID_WIDTH, SPAWN_VALUE,
};

pub use crate::engine::BoardEngine;

pub use crate::session::{tile_class, tile_label, GameSession};
