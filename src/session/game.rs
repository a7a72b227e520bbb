//! Game session driving a `BoardEngine`.

use tracing::info;

use crate::core::{Board, Direction, EngineConfig};
use crate::engine::BoardEngine;

/// A single game, wired the way a front end uses the engine.
///
/// ```
/// use tile_merge::{Direction, EngineConfig, GameSession};
///
/// let mut session = GameSession::new(EngineConfig::default().with_seed(3));
/// assert_eq!(session.board().sum(), 2);
///
/// // Either the tile moved and a new one spawned, or nothing happened.
/// let moved = session.handle_move(Direction::Left);
/// assert_eq!(session.board().sum(), if moved { 4 } else { 2 });
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    engine: BoardEngine,
    moves: u32,
}

impl GameSession {
    /// Create a session and start the first game.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::from_engine(BoardEngine::new(config))
    }

    /// Wrap an existing engine and start a game on it.
    #[must_use]
    pub fn from_engine(engine: BoardEngine) -> Self {
        let mut session = Self { engine, moves: 0 };
        session.start();
        session
    }

    /// Clear the board and spawn the opening tile.
    pub fn start(&mut self) {
        self.engine.reset();
        self.engine.spawn_tile();
        self.moves = 0;
        info!(seed = self.engine.seed(), "game started");
    }

    /// Start over. Same sequence as `start`.
    pub fn restart(&mut self) {
        info!(moves = self.moves, highest = self.engine.board().highest_tile(), "restarting");
        self.start();
    }

    /// Apply a player move. Spawns a tile and returns `true` if the board
    /// changed; returns `false` with no visible change otherwise.
    pub fn handle_move(&mut self, direction: Direction) -> bool {
        if !self.engine.move_tiles(direction) {
            return false;
        }
        self.engine.spawn_tile();
        self.moves += 1;
        true
    }

    /// Handle a DOM-style arrow key code. Unknown keys are ignored.
    pub fn handle_key_code(&mut self, code: u32) -> bool {
        match Direction::from_key_code(code) {
            Some(direction) => self.handle_move(direction),
            None => false,
        }
    }

    /// Board to render.
    #[must_use]
    pub const fn board(&self) -> &Board {
        self.engine.board()
    }

    /// Number of moves that changed the board since the last start.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &BoardEngine {
        &self.engine
    }
}
