//! Interactive session layer.
//!
//! Thin adapters for front ends. The rules never see a half-selected
//! wall: `WallSelection` pairs segments first, and `GameSession` only
//! hands complete actions to the engine.

mod game_session;
mod selection;

pub use game_session::{GameSession, InputMode, WallSelectionOutcome};
pub use selection::{SelectionStep, WallSelection};
