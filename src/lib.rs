//! # rust-2048
//!
//! A deterministic rule engine for the 2048 sliding-tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: A move is a function from (board, direction,
//!    RNG) to a new board, a score delta and a `moved` flag. No hidden state.
//!
//! 2. **One Merge Routine**: Every direction is reduced to "compact left" by
//!    rotating the board counter-clockwise, so all four directions break
//!    ties the same way.
//!
//! 3. **Injected Randomness**: Tile spawns draw from a caller-owned,
//!    seedable `GameRng`. Same seed, same game.
//!
//! ## Example
//!
//! ```
//! use rust_2048::{BoardEngine, Direction, GameRng};
//!
//! let engine = BoardEngine::default();
//! let mut rng = GameRng::new(42);
//!
//! let board = engine.new_game(&mut rng);
//! assert_eq!(board.tile_count(), 2);
//!
//! let result = engine.apply_move(board, Direction::Left, &mut rng);
//! if result.moved {
//!     assert_eq!(result.board.tile_count(), 3 - usize::from(result.score_delta > 0));
//! }
//!
//! let status = engine.evaluate_status(&result.board);
//! assert!(!status.won && !status.stuck);
//! ```
//!
//! ## Modules
//!
//! - `core`: Board, directions, RNG, configuration, errors
//! - `rules`: Line merging and the `BoardEngine`
//! - `game`: `Game` sessions with score tracking and snapshots
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Direction, EngineError, EngineResult, GameConfig, GameRng, GameRngState, BOARD_SIZE,
    MAX_TILE, WIN_TILE,
};

pub use crate::rules::{merge_line, BoardEngine, GameStatus, MoveResult, Outcome};

pub use crate::game::{Game, GameSnapshot};
