//! A single game session.
//!
//! `Game` owns one board, its running score and the RNG that feeds its
//! spawns. Each `play` is one atomic step: tilt, merge, spawn, add score,
//! re-evaluate status. Once the game is won or stuck, further moves are
//! rejected until `restart`.

use tracing::debug;

use super::snapshot::GameSnapshot;
use crate::core::{Board, Direction, EngineError, EngineResult, GameConfig, GameRng};
use crate::rules::{BoardEngine, GameStatus, MoveResult, Outcome};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    engine: BoardEngine,
    board: Board,
    score: u64,
    moves: u32,
    status: GameStatus,
    rng: GameRng,
}

impl Game {
    /// Start a new game with the given configuration and seed.
    pub fn new(config: GameConfig, seed: u64) -> EngineResult<Self> {
        Ok(Self::deal(BoardEngine::new(config)?, seed))
    }

    /// Start a standard game with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::deal(BoardEngine::default(), seed)
    }

    fn deal(engine: BoardEngine, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let board = engine.new_game(&mut rng);
        debug!(seed, %board, "new game");
        Self::assemble(engine, board, 0, 0, rng)
    }

    /// Resume play from an existing board, with a fresh score.
    pub fn from_board(config: GameConfig, board: Board, seed: u64) -> EngineResult<Self> {
        let engine = BoardEngine::new(config)?;
        Ok(Self::assemble(engine, board, 0, 0, GameRng::new(seed)))
    }

    /// Rebuild a game from a snapshot.
    ///
    /// The restored game continues with the same random sequence the
    /// snapshotted game would have used.
    pub fn restore(config: GameConfig, snapshot: &GameSnapshot) -> EngineResult<Self> {
        let engine = BoardEngine::new(config)?;
        Ok(Self::assemble(
            engine,
            snapshot.board,
            snapshot.score,
            snapshot.moves,
            GameRng::from_state(&snapshot.rng),
        ))
    }

    fn assemble(engine: BoardEngine, board: Board, score: u64, moves: u32, rng: GameRng) -> Self {
        let status = engine.evaluate_status(&board);
        Self {
            engine,
            board,
            score,
            moves,
            status,
            rng,
        }
    }

    // === Accessors ===

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Running score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of moves that changed the board.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Status as of the last move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Outcome as of the last move.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.status.outcome()
    }

    /// True once the game is won or stuck.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Seed of the current game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The engine driving this game.
    #[must_use]
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// Directions that would change the board right now.
    #[must_use]
    pub fn legal_directions(&self) -> Vec<Direction> {
        if self.is_over() {
            return Vec::new();
        }
        self.engine.legal_directions(&self.board).into_vec()
    }

    // === Play ===

    /// Play one move.
    ///
    /// A move that changes nothing is not an error: it returns
    /// `moved == false` and leaves the game untouched.
    pub fn play(&mut self, direction: Direction) -> EngineResult<MoveResult> {
        if self.is_over() {
            debug!(%direction, outcome = ?self.outcome(), "move rejected, game over");
            return Err(EngineError::GameOver);
        }

        let result = self.engine.apply_move(self.board, direction, &mut self.rng);
        if !result.moved {
            return Ok(result);
        }

        self.board = result.board;
        self.score += u64::from(result.score_delta);
        self.moves += 1;
        self.status = self.engine.evaluate_status(&self.board);

        if self.status.is_terminal() {
            debug!(
                outcome = ?self.outcome(),
                score = self.score,
                moves = self.moves,
                max_tile = self.board.max_tile(),
                "game over"
            );
        }

        Ok(result)
    }

    /// Parse a direction name and play it.
    pub fn play_named(&mut self, direction: &str) -> EngineResult<MoveResult> {
        self.play(direction.parse()?)
    }

    /// Throw away the current game and deal a new one.
    pub fn restart(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
        self.board = self.engine.new_game(&mut self.rng);
        self.score = 0;
        self.moves = 0;
        self.status = self.engine.evaluate_status(&self.board);
        debug!(seed, board = %self.board, "game restarted");
    }

    // === Snapshots ===

    /// Capture the session as plain data.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            score: self.score,
            moves: self.moves,
            rng: self.rng.state(),
        }
    }
}
