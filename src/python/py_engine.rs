//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, BoardError, Direction, EngineConfig, MergeRule};
use crate::engine::BoardEngine;

fn to_py_err(err: BoardError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for Direction.
#[pyclass(name = "Direction")]
#[derive(Clone, Copy, Debug)]
pub struct PyDirection(pub Direction);

#[pymethods]
impl PyDirection {
    #[classattr]
    const LEFT: PyDirection = PyDirection(Direction::Left);

    #[classattr]
    const UP: PyDirection = PyDirection(Direction::Up);

    #[classattr]
    const RIGHT: PyDirection = PyDirection(Direction::Right);

    #[classattr]
    const DOWN: PyDirection = PyDirection(Direction::Down);

    /// Parse "left", "up", "right", "down" (or their first letter).
    #[staticmethod]
    fn parse(name: &str) -> PyResult<Self> {
        name.parse().map(Self).map_err(to_py_err)
    }

    /// Neighbor of `index` in this direction, or None at the edge.
    fn neighbor(&self, index: usize) -> Option<usize> {
        self.0.neighbor(index)
    }

    fn __repr__(&self) -> String {
        format!("Direction.{}", self.0.name().to_uppercase())
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 as u64
    }
}

/// Python wrapper for BoardEngine.
#[pyclass(name = "BoardEngine")]
pub struct PyBoardEngine {
    inner: BoardEngine,
}

#[pymethods]
impl PyBoardEngine {
    /// Create an engine with an empty board.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic spawns (random if omitted)
    /// - cascade: let merged tiles keep merging within one move
    /// - cells: optional starting position, 16 row-major values
    #[new]
    #[pyo3(signature = (seed = None, cascade = false, cells = None))]
    fn new(seed: Option<u64>, cascade: bool, cells: Option<Vec<u32>>) -> PyResult<Self> {
        let rule = if cascade {
            MergeRule::Cascade
        } else {
            MergeRule::Single
        };
        let config = EngineConfig {
            seed,
            merge_rule: rule,
        };
        let board = match cells {
            Some(values) => Board::from_cells(&values).map_err(to_py_err)?,
            None => Board::new(),
        };
        Ok(Self {
            inner: BoardEngine::from_board(board, config),
        })
    }

    /// Empty every cell.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Spawn a 2 on a random empty cell. False if the board is full.
    fn spawn_tile(&mut self) -> bool {
        self.inner.spawn_tile()
    }

    /// Shift tiles. True if anything changed.
    fn move_tiles(&mut self, direction: PyDirection) -> bool {
        self.inner.move_tiles(direction.0)
    }

    /// Row-major cell values.
    fn cells(&self) -> Vec<u32> {
        self.inner.cells().to_vec()
    }

    /// Seed of the spawn RNG.
    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    fn __str__(&self) -> String {
        self.inner.board().to_string()
    }

    fn __repr__(&self) -> String {
        format!("BoardEngine(cells={:?})", self.inner.cells())
    }
}
