//! Python bindings for the tile-merge engine.
//!
//! # Quick Start
//!
//! ```python
//! import tile_merge as tm
//!
//! engine = tm.BoardEngine(seed=42)
//! engine.spawn_tile()
//!
//! if engine.move_tiles(tm.Direction.LEFT):
//!     engine.spawn_tile()
//!
//! print(engine.cells())
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// tile_merge: a 4x4 tile-merging puzzle engine.
#[pymodule]
fn tile_merge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDirection>()?;
    m.add_class::<PyBoardEngine>()?;
    Ok(())
}
