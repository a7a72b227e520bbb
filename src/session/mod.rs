//! The presentation-layer contract.
//!
//! A front end (terminal, web view, Python notebook) drives the engine the
//! same way every time:
//! - on startup and on restart: reset, spawn one tile, render
//! - on a directional input: move; if the board changed, spawn and re-render
//!
//! `GameSession` packages those sequences so hosts cannot get them out of
//! order, and `style` maps tile values to what a renderer shows.

mod game;
mod style;

pub use game::GameSession;
pub use style::{tile_class, tile_label};
