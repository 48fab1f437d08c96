//! Python bindings for the Quoridor engine.
//!
//! # Quick Start
//!
//! ```python
//! import quoridor_engine as q
//!
//! game = q.Quoridor(board_size=9)
//! print(game.valid_moves())          # [(4, 7), (3, 8), (5, 8)]
//! game.move_to(4, 7)
//! game.place_wall(3, 3, "horizontal")
//! print(game.distance_to_goal(1))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// quoridor_engine: Quoridor rules for Python front ends and agents.
#[pymodule]
fn quoridor_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyWallPosition>()?;
    m.add_class::<PyQuoridor>()?;
    Ok(())
}
