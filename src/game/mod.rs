//! Game sessions: a board, its score and its RNG, advanced one move at a time.

mod session;
mod snapshot;

pub use session::Game;
pub use snapshot::GameSnapshot;
