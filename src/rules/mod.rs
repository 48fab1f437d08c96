//! Quoridor rules.
//!
//! - `movement`: legal pawn destinations including jumps
//! - `walls`: wall legality and placement
//! - `pathing`: reachability and shortest paths
//! - `engine`: the `RulesEngine` seam with turn and phase checks
//!
//! Every function takes a `&GameState` and either answers a query or
//! returns a new state. Nothing is held between calls.

pub mod engine;
pub mod movement;
pub mod pathing;
pub mod walls;

pub use engine::{Quoridor, RulesEngine};
pub use movement::{execute_player_move, get_valid_moves, validate_player_move, MoveValidation, ValidMoves};
pub use pathing::{distance_to_goal, has_path_to_goal, is_wall_between, shortest_path_to_goal};
pub use walls::{execute_wall_placement, valid_wall_placements, validate_wall_placement, WallValidation};
