//! The board engine: spawning, moving and status evaluation.
//!
//! `BoardEngine` is stateless apart from its configuration. Every operation
//! takes a board by value and returns a new one, and every operation that
//! spawns a tile takes the caller's `GameRng`.
//!
//! ## Moves
//!
//! A move is a rotation, a row-wise `merge_line`, and the inverse rotation:
//!
//! | Direction | CCW quarter turns |
//! |-----------|-------------------|
//! | Left      | 0                 |
//! | Up        | 1                 |
//! | Right     | 2                 |
//! | Down      | 3                 |
//!
//! If the board changed, one tile is spawned. If it did not, the original
//! board comes back untouched with no score and no spawn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::line::merge_line;
use crate::core::{Board, Direction, EngineResult, GameConfig, GameRng, BOARD_SIZE, SPAWN_TABLE};

/// Result of tilting a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Board after the move (and after the spawn, if one happened).
    pub board: Board,
    /// True if any cell changed position or value.
    pub moved: bool,
    /// Sum of all tiles created by merges during this move.
    pub score_delta: u32,
}

/// Win and stuck flags, derived from a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    /// Some tile reached the win tile.
    pub won: bool,
    /// Board is full and no neighbours match.
    pub stuck: bool,
}

impl GameStatus {
    /// True if no further moves should be accepted.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.won || self.stuck
    }

    /// Collapse the flags into an outcome. Winning takes precedence.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.won {
            Outcome::Won
        } else if self.stuck {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }
}

/// How a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still possible and the win tile has not been reached.
    InProgress,
    /// The win tile was reached.
    Won,
    /// No move can change the board.
    Lost,
}

/// Rule engine for a single board.
#[derive(Clone, Debug, Default)]
pub struct BoardEngine {
    config: GameConfig,
}

impl BoardEngine {
    /// Create an engine, rejecting configurations that cannot be played.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Deal a fresh board: empty, then `starting_tiles` spawns.
    #[must_use]
    pub fn new_game(&self, rng: &mut GameRng) -> Board {
        (0..self.config.starting_tiles).fold(Board::empty(), |board, _| self.spawn_tile(board, rng))
    }

    /// Place one random tile in a random empty cell.
    ///
    /// The cell is drawn uniformly from the empty cells; the value is drawn
    /// from `SPAWN_TABLE` (2 at 90%, 4 at 10%). A full board is returned
    /// unchanged.
    #[must_use]
    pub fn spawn_tile(&self, mut board: Board, rng: &mut GameRng) -> Board {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return board;
        }

        let position = empty[rng.gen_index(empty.len())];
        let weights = SPAWN_TABLE.map(|(_, weight)| weight);
        let value = rng
            .choose_weighted(&weights)
            .map_or(SPAWN_TABLE[0].0, |i| SPAWN_TABLE[i].0);

        trace!(row = position.0, col = position.1, value, "spawned tile");
        board.set(position, value);
        board
    }

    /// Slide and merge without spawning.
    ///
    /// This is the deterministic half of `apply_move`.
    #[must_use]
    pub fn tilt(&self, board: &Board, direction: Direction) -> MoveResult {
        let turns = direction.quarter_turns();
        let rotated = board.rotate_ccw_by(turns);

        let mut merged = rotated;
        let mut score_delta = 0;
        for row in 0..BOARD_SIZE {
            let (line, score) = merge_line(rotated.rows()[row]);
            merged.set_row(row, line);
            score_delta += score;
        }

        MoveResult {
            board: merged.rotate_ccw_by((4 - turns) % 4),
            moved: merged != rotated,
            score_delta,
        }
    }

    /// Apply a move: tilt, and spawn a tile if anything changed.
    #[must_use]
    pub fn apply_move(&self, board: Board, direction: Direction, rng: &mut GameRng) -> MoveResult {
        let tilted = self.tilt(&board, direction);

        if !tilted.moved {
            trace!(%direction, "move changed nothing");
            return MoveResult {
                board,
                moved: false,
                score_delta: 0,
            };
        }

        trace!(%direction, score_delta = tilted.score_delta, "move applied");
        MoveResult {
            board: self.spawn_tile(tilted.board, rng),
            ..tilted
        }
    }

    /// Compute win and stuck flags.
    #[must_use]
    pub fn evaluate_status(&self, board: &Board) -> GameStatus {
        GameStatus {
            won: board.max_tile() >= self.config.win_tile,
            stuck: board.is_full() && !board.has_adjacent_pair(),
        }
    }

    /// Directions whose tilt would change the board.
    #[must_use]
    pub fn legal_directions(&self, board: &Board) -> SmallVec<[Direction; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.tilt(board, direction).moved)
            .collect()
    }
}
