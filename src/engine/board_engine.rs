//! Board engine implementation.

use tracing::{debug, trace};

use crate::core::{Board, Direction, EngineConfig, MergeRule, TileRng, CELL_COUNT, SPAWN_VALUE};

/// Largest tile the engine will produce. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// Owns the board and applies moves, merges, and spawns.
///
/// ```
/// use tile_merge::{Board, BoardEngine, Direction, EngineConfig};
///
/// let board = Board::from_cells(&[2, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
/// let mut engine = BoardEngine::from_board(board, EngineConfig::default().with_seed(1));
///
/// assert!(engine.move_tiles(Direction::Left));
/// assert_eq!(engine.cells()[..4], [4, 0, 0, 0]);
/// assert!(engine.spawn_tile());
/// assert_eq!(engine.board().sum(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct BoardEngine {
    board: Board,
    rng: TileRng,
    config: EngineConfig,
}

impl BoardEngine {
    /// Create an engine with an empty board.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::from_board(Board::new(), config)
    }

    /// Create an engine with an empty board and a fixed spawn seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig::new().with_seed(seed))
    }

    /// Create an engine starting from an existing position.
    #[must_use]
    pub fn from_board(board: Board, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => TileRng::new(seed),
            None => TileRng::from_entropy(),
        };
        debug!(seed = rng.seed(), rule = ?config.merge_rule, "engine created");
        Self { board, rng, config }
    }

    /// Current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Current cell values, row-major.
    #[must_use]
    pub const fn cells(&self) -> &[u32; CELL_COUNT] {
        self.board.cells()
    }

    /// Configuration this engine was built with.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seed of the spawn RNG. Useful for replaying an unseeded game.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Empty every cell.
    pub fn reset(&mut self) {
        self.board.clear();
        debug!("board reset");
    }

    /// Put a 2 on a uniformly chosen empty cell.
    ///
    /// Returns `false`, leaving the board untouched, when no cell is empty.
    pub fn spawn_tile(&mut self) -> bool {
        let candidates = self.board.empty_cells();
        let Some(&index) = self.rng.choose(&candidates) else {
            debug!("board full, nothing spawned");
            return false;
        };

        self.board.cells_mut()[index] = SPAWN_VALUE;
        debug!(index, candidates = candidates.len(), "tile spawned");
        true
    }

    /// Shift every tile toward `direction`, merging equal neighbors.
    ///
    /// Passes scan cells 0..16 in increasing order whatever the direction,
    /// reading live values, and repeat until a pass changes nothing. Returns
    /// `true` if any cell changed; the caller should then spawn a tile.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        let mut merged = [false; CELL_COUNT];
        let mut board_changed = false;
        let mut passes = 0u32;

        loop {
            passes += 1;
            let changed = self.run_pass(direction, &mut merged);
            trace!(%direction, pass = passes, changed, "pass complete");
            if !changed {
                break;
            }
            board_changed = true;
        }

        debug!(%direction, passes, changed = board_changed, "move applied");
        board_changed
    }

    /// One scan over all cells. Returns whether anything changed.
    ///
    /// `merged` marks cells holding a tile produced by a merge earlier in
    /// this move. The mark follows the tile when it slides.
    fn run_pass(&mut self, direction: Direction, merged: &mut [bool; CELL_COUNT]) -> bool {
        let single = self.config.merge_rule == MergeRule::Single;
        let cells = self.board.cells_mut();
        let mut changed = false;

        for source in 0..CELL_COUNT {
            let Some(target) = direction.neighbor(source) else {
                continue;
            };
            let value = cells[source];
            if value == 0 {
                continue;
            }

            let locked = single && (merged[source] || merged[target]);
            if cells[target] == value && value < MAX_TILE && !locked {
                cells[target] += value;
                cells[source] = 0;
                merged[target] = true;
                merged[source] = false;
                changed = true;
            } else if cells[target] == 0 {
                cells[target] = value;
                cells[source] = 0;
                merged[target] = merged[source];
                merged[source] = false;
                changed = true;
            }
        }

        changed
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
