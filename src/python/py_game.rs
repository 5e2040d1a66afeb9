//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{Board, GameConfig, GameRng, BOARD_SIZE};
use crate::game::Game;
use crate::rules::merge_line_checked;

/// Python wrapper for a game session.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed; drawn from the OS when omitted
    /// - win_tile: Tile value that wins the game
    #[new]
    #[pyo3(signature = (seed = None, win_tile = 2048))]
    fn new(seed: Option<u64>, win_tile: u32) -> PyResult<Self> {
        let seed = seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        let config = GameConfig::new().with_win_tile(win_tile);
        Ok(Self {
            game: Game::new(config, seed)?,
        })
    }

    /// Start a game from explicit rows.
    #[staticmethod]
    #[pyo3(signature = (rows, seed = 0))]
    fn from_rows(rows: Vec<Vec<u32>>, seed: u64) -> PyResult<Self> {
        let board = Board::from_nested(&rows)?;
        Ok(Self {
            game: Game::from_board(GameConfig::default(), board, seed)?,
        })
    }

    /// Play a move by name ("up", "down", "left", "right").
    ///
    /// Returns `(moved, score_delta)`. Raises `ValueError` for unknown
    /// directions or if the game is already over.
    fn play(&mut self, direction: &str) -> PyResult<(bool, u32)> {
        let result = self.game.play_named(direction)?;
        Ok((result.moved, result.score_delta))
    }

    /// Restart with a new seed.
    #[pyo3(signature = (seed = None))]
    fn restart(&mut self, seed: Option<u64>) {
        let seed = seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        self.game.restart(seed);
    }

    /// Board as a list of rows.
    fn board(&self) -> Vec<Vec<u32>> {
        self.game.board().rows().iter().map(|row| row.to_vec()).collect()
    }

    /// Directions that would change the board.
    fn legal_directions(&self) -> Vec<String> {
        self.game
            .legal_directions()
            .into_iter()
            .map(|d| d.to_string())
            .collect()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.game.score()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.game.moves()
    }

    #[getter]
    fn won(&self) -> bool {
        self.game.status().won
    }

    #[getter]
    fn stuck(&self) -> bool {
        self.game.status().stuck
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.game.seed()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(score={}, moves={}, outcome={:?})",
            self.game.score(),
            self.game.moves(),
            self.game.outcome()
        )
    }

    fn __str__(&self) -> String {
        self.game.board().to_string()
    }
}

/// Merge one line toward index 0. Returns `(line, score)`.
///
/// Raises `ValueError` if any cell is not a valid tile.
#[pyfunction]
#[pyo3(name = "merge_line")]
pub fn py_merge_line(line: [u32; BOARD_SIZE]) -> PyResult<(Vec<u32>, u32)> {
    let (merged, score) = merge_line_checked(line)?;
    Ok((merged.to_vec(), score))
}
