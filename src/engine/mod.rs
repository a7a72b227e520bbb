//! The board engine: move, merge, and spawn.
//!
//! `BoardEngine` owns a `Board` and is the only thing that mutates it.
//! Every operation is synchronous and total; "nothing happened" is
//! reported as `false`, never as an error.

mod board_engine;

pub use board_engine::{BoardEngine, MAX_TILE};
pub use crate::core::MergeRule;
