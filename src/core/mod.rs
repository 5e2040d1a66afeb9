//! Core engine types: board, directions, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules that move tiles live in
//! `rules`; the stateful game session lives in `game`.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use board::{check_cell, Board, Cells, Position};
pub use config::{
    GameConfig, BOARD_SIZE, CELL_COUNT, MAX_TILE, SPAWN_TABLE, STARTING_TILES, WIN_TILE,
};
pub use direction::Direction;
pub use error::{EngineError, EngineResult};
pub use rng::{GameRng, GameRngState};
