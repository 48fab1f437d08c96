//! # quoridor-engine
//!
//! A deterministic rules engine for two-player Quoridor.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not scene graphs**: every operation takes a
//!    `&GameState` and returns a new one. Callers own identity and
//!    persistence.
//!
//! 2. **Validation is a value**: `validate_*` report why something is
//!    illegal and never fail. Only `execute_*` and
//!    `RulesEngine::apply_action` return errors, and those indicate a
//!    caller skipping validation.
//!
//! 3. **One wall geometry**: a wall spans two cell edges. The same
//!    footprint decides overlap, movement blocking and reachability.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: wall list and move history are `im`
//!   vectors, so snapshots clone in O(1) and share structure.
//!
//! - **No-block guarantee**: every accepted wall leaves both players a
//!   route to their goal row (checked by BFS over a tentative wall list).
//!
//! ## Modules
//!
//! - `core`: positions, board, players, walls, actions, state, config
//! - `rules`: move/wall legality, path search, the `RulesEngine` seam
//! - `session`: two-stage wall selection and a per-match UI adapter
//! - `error`: engine errors and rejection reasons

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    create_initial_state, Action, AiLevel, BoardSize, Direction, GameConfig, GameMode, GamePhase, GameState, Move,
    Player, PlayerId, PlayerMap, Position, Wall, WallId, WallOrientation, WallPosition, WallSegment,
};

pub use crate::error::{EngineError, MoveRejection, WallRejection};

pub use crate::rules::{
    distance_to_goal, execute_player_move, execute_wall_placement, get_valid_moves, has_path_to_goal,
    shortest_path_to_goal, valid_wall_placements, validate_player_move, validate_wall_placement, MoveValidation,
    Quoridor, RulesEngine, ValidMoves, WallValidation,
};

pub use crate::session::{GameSession, InputMode, SelectionStep, WallSelection, WallSelectionOutcome};
