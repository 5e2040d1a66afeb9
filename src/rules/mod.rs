//! Board rules.
//!
//! - `merge_line`: compact and merge one line toward index 0
//! - `BoardEngine`: spawn tiles, apply moves, evaluate win/stuck status
//!
//! All four directions share `merge_line` through board rotation, so they
//! break ties identically.

pub mod engine;
pub mod line;

pub use engine::{BoardEngine, GameStatus, MoveResult, Outcome};
pub use line::{merge_line, merge_line_checked, Line};
