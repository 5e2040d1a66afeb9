//! Plain-data snapshots of a game session.
//!
//! A snapshot is everything needed to resume a session: the board, the
//! score, the move counter and the RNG stream position. It serializes with
//! any serde format; `to_bytes`/`from_bytes` use bincode.

use serde::{Deserialize, Serialize};

use crate::core::{Board, EngineResult, GameRngState};

/// Serializable session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board at the time of the snapshot.
    pub board: Board,
    /// Running score.
    pub score: u64,
    /// Moves that changed the board.
    pub moves: u32,
    /// RNG position, so spawns continue where they left off.
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode as compact binary.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from binary, re-validating the board.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
