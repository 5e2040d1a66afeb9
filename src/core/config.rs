//! Game configuration.
//!
//! The board geometry and the spawn distribution are fixed at compile time.
//! `GameConfig` carries the few values a host may reasonably vary:
//! - `win_tile`: The tile value that ends the game in a win
//! - `starting_tiles`: How many tiles a fresh board is dealt
//!
//! ```
//! use rust_2048::core::GameConfig;
//!
//! let config = GameConfig::default().with_win_tile(4096);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Side length of the (square) board.
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that wins the game.
pub const WIN_TILE: u32 = 2048;

/// Largest tile a board may hold.
///
/// With only 2s and 4s spawning, a 4×4 board can build at most one tile of
/// this size. Tiles of this value never merge, so no cell exceeds it.
pub const MAX_TILE: u32 = 1 << 17;

/// Tiles dealt onto an empty board at game start.
pub const STARTING_TILES: usize = 2;

/// Spawned tile values and their relative weights.
pub const SPAWN_TABLE: [(u32, f32); 2] = [(2, 0.9), (4, 0.1)];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// A board holding a tile at least this large is won.
    pub win_tile: u32,

    /// Tiles dealt by `BoardEngine::new_game`.
    pub starting_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_tile: WIN_TILE,
            starting_tiles: STARTING_TILES,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning tile value.
    #[must_use]
    pub fn with_win_tile(mut self, win_tile: u32) -> Self {
        self.win_tile = win_tile;
        self
    }

    /// Set the number of tiles dealt at game start.
    #[must_use]
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }

    /// Check the configuration can describe a playable game.
    pub fn validate(&self) -> EngineResult<()> {
        if self.win_tile < 4 || self.win_tile > MAX_TILE || !self.win_tile.is_power_of_two() {
            return Err(EngineError::InvalidConfig(format!(
                "win tile {} is not a power of two in 4..={}",
                self.win_tile, MAX_TILE
            )));
        }
        if self.starting_tiles > CELL_COUNT {
            return Err(EngineError::InvalidConfig(format!(
                "cannot deal {} starting tiles onto {} cells",
                self.starting_tiles, CELL_COUNT
            )));
        }
        Ok(())
    }
}
