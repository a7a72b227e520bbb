//! Board engine integration tests.
//!
//! These tests drive the engine through its public API only, the same
//! way a front end would.

use tile_merge::{
    Board, BoardEngine, Direction, EngineConfig, GameSession, MergeRule, CELL_COUNT,
};

fn board(cells: [u32; CELL_COUNT]) -> Board {
    Board::from_cells(&cells).unwrap()
}

fn engine_at(cells: [u32; CELL_COUNT]) -> BoardEngine {
    BoardEngine::from_board(board(cells), EngineConfig::new().with_seed(42))
}

fn first_row(values: [u32; 4]) -> [u32; CELL_COUNT] {
    let mut cells = [0; CELL_COUNT];
    cells[..4].copy_from_slice(&values);
    cells
}

// =============================================================================
// Move Scenarios
// =============================================================================

/// Two equal neighbors merge into the leftmost cell.
#[test]
fn test_pair_merges_left() {
    let mut engine = engine_at(first_row([2, 2, 0, 0]));

    assert!(engine.move_tiles(Direction::Left));
    assert_eq!(engine.cells(), &first_row([4, 0, 0, 0]));
}

/// A tile slides across a gap, then merges, all in one move.
#[test]
fn test_gap_slide_then_merge() {
    let mut engine = engine_at(first_row([2, 0, 2, 0]));

    assert!(engine.move_tiles(Direction::Left));
    assert_eq!(engine.cells(), &first_row([4, 0, 0, 0]));
}

/// Four equal tiles merge pairwise, never three into one.
#[test]
fn test_row_of_four_merges_pairwise() {
    let mut engine = engine_at(first_row([2, 2, 2, 2]));

    assert!(engine.move_tiles(Direction::Left));
    assert_eq!(engine.cells(), &first_row([4, 4, 0, 0]));
}

/// The unrestricted rule lets a merged tile keep absorbing.
#[test]
fn test_cascade_rule_row_of_four() {
    let config = EngineConfig::new()
        .with_seed(42)
        .with_merge_rule(MergeRule::Cascade);
    let mut engine = BoardEngine::from_board(board(first_row([2, 2, 2, 2])), config);

    assert!(engine.move_tiles(Direction::Left));
    assert_eq!(engine.cells(), &first_row([8, 0, 0, 0]));
}

/// A packed board with no equal neighbors cannot move in any direction.
#[test]
fn test_packed_board_is_stuck() {
    let cells = [
        2, 4, 2, 4,
        4, 2, 4, 2,
        2, 4, 2, 4,
        4, 2, 4, 2,
    ];

    for direction in Direction::ALL {
        let mut engine = engine_at(cells);
        assert!(!engine.move_tiles(direction));
        assert_eq!(engine.cells(), &cells);
    }
}

/// Every column moves independently when shifting down.
#[test]
fn test_columns_shift_down() {
    let cells = [
        2, 0, 4, 0,
        0, 0, 4, 0,
        0, 8, 0, 0,
        0, 0, 0, 16,
    ];
    let expected = [
        0, 0, 0, 0,
        0, 0, 0, 0,
        0, 0, 0, 0,
        2, 8, 8, 16,
    ];
    let mut engine = engine_at(cells);

    assert!(engine.move_tiles(Direction::Down));
    assert_eq!(engine.cells(), &expected);
}

/// Shifting up mirrors shifting down.
#[test]
fn test_columns_shift_up() {
    let cells = [
        0, 0, 0, 2,
        0, 2, 0, 0,
        4, 0, 0, 2,
        4, 2, 0, 0,
    ];
    let expected = [
        8, 4, 0, 4,
        0, 0, 0, 0,
        0, 0, 0, 0,
        0, 0, 0, 0,
    ];
    let mut engine = engine_at(cells);

    assert!(engine.move_tiles(Direction::Up));
    assert_eq!(engine.cells(), &expected);
}

/// A second move that reports no change leaves the board identical.
#[test]
fn test_repeat_move_is_noop() {
    let mut engine = engine_at(first_row([0, 2, 0, 4]));

    assert!(engine.move_tiles(Direction::Right));
    let after_first = *engine.board();

    assert!(!engine.move_tiles(Direction::Right));
    assert_eq!(engine.board(), &after_first);
}

// =============================================================================
// Spawn
// =============================================================================

/// Spawning on an empty board places exactly one 2.
#[test]
fn test_spawn_on_empty_board() {
    let mut engine = BoardEngine::with_seed(7);

    assert!(engine.spawn_tile());
    let occupied: Vec<u32> = engine.cells().iter().copied().filter(|&v| v != 0).collect();
    assert_eq!(occupied, vec![2]);
}

/// Spawning on a full board fails and changes nothing.
#[test]
fn test_spawn_on_full_board() {
    let cells = [2; CELL_COUNT];
    let mut engine = engine_at(cells);

    assert!(!engine.spawn_tile());
    assert_eq!(engine.cells(), &cells);
}

/// Spawn positions cover the whole board over many seeds.
#[test]
fn test_spawn_reaches_every_cell() {
    let mut seen = [false; CELL_COUNT];
    for seed in 0..500 {
        let mut engine = BoardEngine::with_seed(seed);
        engine.spawn_tile();
        let index = engine.cells().iter().position(|&v| v == 2).unwrap();
        seen[index] = true;
    }
    assert!(seen.iter().all(|&s| s), "unreached cells: {:?}", seen);
}

// =============================================================================
// Independent Games
// =============================================================================

/// Two engines never share state.
#[test]
fn test_engines_are_independent() {
    let mut a = engine_at(first_row([2, 2, 0, 0]));
    let b = engine_at(first_row([2, 2, 0, 0]));

    a.move_tiles(Direction::Left);
    assert_eq!(b.cells(), &first_row([2, 2, 0, 0]));
}

/// Same seed and same inputs replay the same game.
#[test]
fn test_seeded_sessions_replay() {
    let inputs = [
        Direction::Left, Direction::Up, Direction::Right, Direction::Down,
        Direction::Left, Direction::Left, Direction::Up, Direction::Right,
    ];
    let mut a = GameSession::new(EngineConfig::new().with_seed(2024));
    let mut b = GameSession::new(EngineConfig::new().with_seed(2024));

    for direction in inputs {
        assert_eq!(a.handle_move(direction), b.handle_move(direction));
        assert_eq!(a.board(), b.board());
    }
}

/// A session plays until the board locks up without breaking invariants.
#[test]
fn test_session_plays_to_completion() {
    let mut session = GameSession::new(EngineConfig::new().with_seed(99));
    let mut turns = 0;

    while Direction::ALL.iter().any(|&d| session.handle_move(d)) {
        turns += 1;
        assert!(turns < 100_000, "game never ended");
    }

    assert!(session.board().is_full());
    assert!(session.moves() > 0);
}
