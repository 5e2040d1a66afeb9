//! Single-line compaction and merging.
//!
//! All four directions reduce to this routine: the board is rotated so the
//! tilt direction points left, then each row is merged toward index 0.

use crate::core::{check_cell, EngineResult, BOARD_SIZE, MAX_TILE};

/// One row or column of the board.
pub type Line = [u32; BOARD_SIZE];

/// Compact a line toward index 0, merging equal neighbours once.
///
/// Returns the merged line and the score it earned (the sum of every tile
/// created by a merge). A tile produced by a merge never merges again in
/// the same pass, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`. Tiles at or
/// above `MAX_TILE` are never merged.
///
/// ```
/// use rust_2048::rules::merge_line;
///
/// assert_eq!(merge_line([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
/// assert_eq!(merge_line([0, 4, 0, 4]), ([8, 0, 0, 0], 8));
/// assert_eq!(merge_line([2, 4, 8, 16]), ([2, 4, 8, 16], 0));
/// ```
#[must_use]
pub fn merge_line(line: Line) -> (Line, u32) {
    let mut merged = [0; BOARD_SIZE];
    let mut len = 0;
    let mut score = 0;
    // Tile waiting to see whether its successor matches it.
    let mut pending: Option<u32> = None;

    for value in line.into_iter().filter(|&v| v != 0) {
        match pending {
            Some(held) if held == value && held < MAX_TILE => {
                merged[len] = held * 2;
                score += held * 2;
                len += 1;
                pending = None;
            }
            Some(held) => {
                merged[len] = held;
                len += 1;
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }

    if let Some(held) = pending {
        merged[len] = held;
    }

    (merged, score)
}

/// `merge_line` for values from outside the engine.
///
/// Every cell is checked first; an offending value is reported as an
/// `InvalidTile` at row 0 and its index in the line.
pub fn merge_line_checked(line: Line) -> EngineResult<(Line, u32)> {
    for (col, &value) in line.iter().enumerate() {
        check_cell(value, (0, col))?;
    }
    Ok(merge_line(line))
}
