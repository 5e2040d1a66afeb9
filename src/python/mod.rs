//! Python bindings for the rust-2048 engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.Game(seed=42)
//! moved, gained = game.play("left")
//! print(game.board(), game.score, game.won, game.stuck)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// rust_2048: a deterministic 2048 rule engine.
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_function(wrap_pyfunction!(py_game::py_merge_line, m)?)?;
    Ok(())
}
