//! Board engine integration tests.
//!
//! These exercise the public engine surface the way a host would: deal a
//! board, tilt it, and read back status.

use rust_2048::{Board, BoardEngine, Direction, EngineError, GameRng, Outcome, MAX_TILE};

fn board(cells: [[u32; 4]; 4]) -> Board {
    Board::from_rows(cells).unwrap()
}

fn checkerboard() -> Board {
    board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

/// Two corner tiles tilted left land in column 0 of their own rows.
#[test]
fn test_left_move_does_not_merge_across_rows() {
    let engine = BoardEngine::default();
    let mut rng = GameRng::new(42);
    let start = board([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]]);

    let result = engine.apply_move(start, Direction::Left, &mut rng);

    assert!(result.moved);
    assert_eq!(result.score_delta, 0);

    let pre_spawn = board([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0]]);
    let new_tiles: Vec<_> = result
        .board
        .to_flat()
        .iter()
        .zip(pre_spawn.to_flat().iter())
        .filter(|(after, before)| after != before)
        .map(|(&after, &before)| (after, before))
        .collect();

    assert_eq!(new_tiles.len(), 1, "exactly one cell should differ: {:?}", result.board);
    let (value, was) = new_tiles[0];
    assert_eq!(was, 0);
    assert!(value == 2 || value == 4);
}

// =============================================================================
// Merge Semantics Through Moves
// =============================================================================

#[test]
fn test_no_double_merge_in_every_direction() {
    let engine = BoardEngine::default();

    let row = board([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(engine.tilt(&row, Direction::Left).board.rows()[0], [4, 4, 0, 0]);
    assert_eq!(engine.tilt(&row, Direction::Right).board.rows()[0], [0, 0, 4, 4]);

    let column = row.transpose();
    let up = engine.tilt(&column, Direction::Up).board;
    assert_eq!(up, board([[4, 0, 0, 0], [4, 0, 0, 0], [0; 4], [0; 4]]));
    let down = engine.tilt(&column, Direction::Down).board;
    assert_eq!(down, board([[0; 4], [0; 4], [4, 0, 0, 0], [4, 0, 0, 0]]));
}

#[test]
fn test_merge_toward_tilt_edge() {
    let engine = BoardEngine::default();
    // Three equal tiles: the pair nearest the tilt edge merges.
    let start = board([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);

    assert_eq!(engine.tilt(&start, Direction::Left).board.rows()[0], [4, 2, 0, 0]);
    assert_eq!(engine.tilt(&start, Direction::Right).board.rows()[0], [0, 0, 2, 4]);
}

#[test]
fn test_score_sums_all_rows() {
    let engine = BoardEngine::default();
    let start = board([[2, 2, 0, 0], [8, 8, 0, 0], [16, 0, 16, 0], [2, 4, 8, 16]]);

    let result = engine.tilt(&start, Direction::Left);

    assert_eq!(result.score_delta, 4 + 16 + 32);
    assert_eq!(result.board.rows()[3], [2, 4, 8, 16]);
}

// =============================================================================
// Rotation Symmetry
// =============================================================================

#[test]
fn test_right_is_mirrored_left() {
    let engine = BoardEngine::default();
    let start = board([[2, 2, 4, 0], [0, 8, 8, 8], [4, 0, 0, 4], [2, 4, 8, 16]]);

    let right = engine.tilt(&start, Direction::Right);
    let mirrored = engine.tilt(&start.mirror_horizontal(), Direction::Left);

    assert_eq!(right.board, mirrored.board.mirror_horizontal());
    assert_eq!(right.score_delta, mirrored.score_delta);
}

#[test]
fn test_down_is_flipped_up() {
    let engine = BoardEngine::default();
    let start = board([[2, 0, 4, 2], [2, 8, 4, 0], [4, 8, 0, 2], [4, 0, 8, 2]]);

    let down = engine.tilt(&start, Direction::Down);
    let flipped = engine.tilt(&start.mirror_vertical(), Direction::Up);

    assert_eq!(down.board, flipped.board.mirror_vertical());
    assert_eq!(down.score_delta, flipped.score_delta);
}

#[test]
fn test_up_is_transposed_left() {
    let engine = BoardEngine::default();
    let start = board([[2, 0, 4, 2], [2, 8, 4, 0], [4, 8, 0, 2], [4, 0, 8, 2]]);

    let up = engine.tilt(&start, Direction::Up);
    let transposed = engine.tilt(&start.transpose(), Direction::Left);

    assert_eq!(up.board, transposed.board.transpose());
}

#[test]
fn test_up_moves_tiles_to_top_row() {
    let engine = BoardEngine::default();
    let start = board([[0; 4], [0; 4], [0; 4], [2, 4, 8, 16]]);

    let up = engine.tilt(&start, Direction::Up);

    assert_eq!(up.board.rows()[0], [2, 4, 8, 16]);
    assert_eq!(up.board.tile_count(), 4);
}

// =============================================================================
// Status
// =============================================================================

#[test]
fn test_single_2048_wins() {
    let engine = BoardEngine::default();
    let status = engine.evaluate_status(&board([[0; 4], [0, 0, 2048, 0], [0; 4], [0; 4]]));

    assert!(status.won);
    assert!(!status.stuck);
}

#[test]
fn test_tiles_beyond_2048_still_win() {
    let engine = BoardEngine::default();
    let status = engine.evaluate_status(&board([[4096, 0, 0, 0], [0; 4], [0; 4], [0; 4]]));
    assert!(status.won);
}

#[test]
fn test_checkerboard_is_stuck() {
    let engine = BoardEngine::default();
    let status = engine.evaluate_status(&checkerboard());

    assert!(status.stuck);
    assert_eq!(status.outcome(), Outcome::Lost);

    // And no tilt changes it.
    for direction in Direction::ALL {
        assert!(!engine.tilt(&checkerboard(), direction).moved);
    }
}

#[test]
fn test_checkerboard_with_pair_is_not_stuck() {
    let engine = BoardEngine::default();
    let mut cells = *checkerboard().rows();
    cells[3][3] = 4; // matches its left and upper neighbours
    let status = engine.evaluate_status(&board(cells));

    assert!(!status.stuck);
    assert!(!engine.legal_directions(&board(cells)).is_empty());
}

#[test]
fn test_full_board_with_vertical_pair_is_not_stuck() {
    let engine = BoardEngine::default();
    let start = board([[2, 4, 2, 4], [2, 8, 16, 32], [64, 128, 256, 512], [4, 2, 4, 2]]);

    assert!(!engine.evaluate_status(&start).stuck);
    let legal = engine.legal_directions(&start);
    assert_eq!(legal.as_slice(), &[Direction::Up, Direction::Down]);
}

// =============================================================================
// Tile Ceiling
// =============================================================================

/// Merging up to the ceiling scores normally and leaves a valid board.
#[test]
fn test_merge_into_max_tile() {
    let engine = BoardEngine::default();
    let half = MAX_TILE / 2;
    let start = board([[half, half, 0, 0]; 4]);

    let result = engine.tilt(&start, Direction::Left);

    assert!(result.moved);
    assert_eq!(result.score_delta, 4 * MAX_TILE);
    assert_eq!(result.board.rows(), &[[MAX_TILE, 0, 0, 0]; 4]);
    assert_eq!(result.board.sum(), start.sum());
    assert!(Board::from_rows(*result.board.rows()).is_ok());
}

/// A board full of ceiling tiles cannot move and is stuck.
#[test]
fn test_full_board_of_max_tiles_is_stuck() {
    let engine = BoardEngine::default();
    let full = board([[MAX_TILE; 4]; 4]);

    for direction in Direction::ALL {
        let result = engine.tilt(&full, direction);
        assert!(!result.moved);
        assert_eq!(result.score_delta, 0);
    }
    assert!(engine.legal_directions(&full).is_empty());

    let status = engine.evaluate_status(&full);
    assert!(status.won);
    assert!(status.stuck);
}

#[test]
fn test_tiles_above_ceiling_are_rejected() {
    let err = Board::from_rows([[MAX_TILE * 2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
    assert_eq!(err, EngineError::InvalidTile { row: 0, col: 0, value: MAX_TILE * 2 });

    let err = Board::from_flat(&[1 << 31; 16]).unwrap_err();
    assert_eq!(err, EngineError::InvalidTile { row: 0, col: 0, value: 1 << 31 });
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_spawns() {
    let engine = BoardEngine::default();
    let mut rng1 = GameRng::new(31337);
    let mut rng2 = GameRng::new(31337);

    let mut b1 = engine.new_game(&mut rng1);
    let mut b2 = engine.new_game(&mut rng2);
    assert_eq!(b1, b2);

    let cycle = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
    for direction in cycle.repeat(10) {
        b1 = engine.apply_move(b1, direction, &mut rng1).board;
        b2 = engine.apply_move(b2, direction, &mut rng2).board;
        assert_eq!(b1, b2);
    }
}
