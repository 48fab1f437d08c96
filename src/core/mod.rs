//! Core engine types: positions, board, players, walls, actions, state.
//!
//! Everything here is a plain value. The rules in [`crate::rules`]
//! take these by reference and return new values.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod position;
pub mod state;
pub mod wall;

pub use action::{Action, Move};
pub use board::BoardSize;
pub use config::{AiLevel, GameConfig, GameMode};
pub use player::{Player, PlayerId, PlayerMap};
pub use position::{Direction, Position};
pub use state::{create_initial_state, GamePhase, GameState};
pub use wall::{Wall, WallId, WallOrientation, WallPosition, WallSegment};
