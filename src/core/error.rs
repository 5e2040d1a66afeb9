//! Engine error type.
//!
//! The rules themselves are total over well-formed boards. Errors only arise
//! at the boundary: parsing directions, validating boards and configs, and
//! driving a session that has already ended.

use thiserror::Error;

/// Errors emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Direction name was not one of up/down/left/right.
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),

    /// Board did not have the expected number of rows.
    #[error("board has {found} rows, expected {expected}")]
    RowCount { found: usize, expected: usize },

    /// A board row did not have the expected number of cells.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// Flat board did not have the expected number of cells.
    #[error("board has {found} cells, expected {expected}")]
    CellCount { found: usize, expected: usize },

    /// A populated cell held something other than a power of two in `2..=MAX_TILE`.
    #[error("cell ({row}, {col}) holds {value}, not a power of two in 2..=131072")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// Configuration cannot describe a playable game.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Move attempted after the game was won or became stuck.
    #[error("game is over")]
    GameOver,

    /// Binary snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(feature = "python")]
impl From<EngineError> for pyo3::PyErr {
    fn from(err: EngineError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
