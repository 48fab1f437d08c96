//! Engine errors and validation rejections.
//!
//! `validate_*` functions never fail: they return a value carrying a
//! [`MoveRejection`] or [`WallRejection`]. Only the `execute_*` functions
//! and [`RulesEngine::apply_action`](crate::rules::RulesEngine::apply_action)
//! return an [`EngineError`], and a returned error always leaves the input
//! state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GamePhase, PlayerId, Position};
use crate::session::InputMode;

/// Why a pawn move was refused.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("Destination is off the board")]
    OutOfBounds,
    #[error("Invalid move")]
    NotReachable,
}

/// Why a wall placement was refused, in check order.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallRejection {
    #[error("No walls remaining")]
    NoWallsRemaining,
    #[error("Wall position out of bounds")]
    OutOfBounds,
    #[error("Wall overlaps with existing wall")]
    Overlaps,
    #[error("Wall would block player {}'s path to goal", .0.number())]
    BlocksPath(PlayerId),
}

impl WallRejection {
    /// True for the path-connectivity rejection.
    #[must_use]
    pub fn blocks_path(self) -> bool {
        matches!(self, WallRejection::BlocksPath(_))
    }
}

/// Errors returned by state-changing operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{reason}: {player} cannot move to {to}")]
    InvalidMove {
        player: PlayerId,
        to: Position,
        reason: MoveRejection,
    },

    #[error("{rejection}")]
    InvalidWall {
        rejection: WallRejection,
        blocks_path: bool,
    },

    #[error("board size {size} is outside the supported range 3..=25")]
    InvalidBoardSize { size: u8 },

    #[error("unknown ai level: {name}")]
    UnknownAiLevel { name: String },

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    #[error("the game is already over")]
    GameOver,

    #[error("the game is paused")]
    GamePaused,

    #[error("cannot go from {from:?} to {to:?}")]
    InvalidPhaseTransition { from: GamePhase, to: GamePhase },

    /// Session input that the active input mode does not accept.
    #[error("not accepted in {mode} mode")]
    WrongInputMode { mode: InputMode },
}

impl EngineError {
    pub(crate) fn invalid_wall(rejection: WallRejection) -> Self {
        EngineError::InvalidWall {
            rejection,
            blocks_path: rejection.blocks_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(MoveRejection::NotReachable.to_string(), "Invalid move");
        assert_eq!(WallRejection::NoWallsRemaining.to_string(), "No walls remaining");
        assert_eq!(
            WallRejection::BlocksPath(PlayerId::Two).to_string(),
            "Wall would block player 2's path to goal"
        );
    }

    #[test]
    fn test_invalid_wall_carries_blocks_path() {
        let err = EngineError::invalid_wall(WallRejection::BlocksPath(PlayerId::One));
        assert_eq!(
            err,
            EngineError::InvalidWall {
                rejection: WallRejection::BlocksPath(PlayerId::One),
                blocks_path: true,
            }
        );

        let err = EngineError::invalid_wall(WallRejection::Overlaps);
        assert!(matches!(err, EngineError::InvalidWall { blocks_path: false, .. }));
        assert_eq!(err.to_string(), "Wall overlaps with existing wall");
    }

    #[test]
    fn test_invalid_move_message() {
        let err = EngineError::InvalidMove {
            player: PlayerId::One,
            to: Position::new(0, 0),
            reason: MoveRejection::NotReachable,
        };
        assert_eq!(err.to_string(), "Invalid move: Player 1 cannot move to (0, 0)");
    }

    #[test]
    fn test_wrong_input_mode_message() {
        let err = EngineError::WrongInputMode { mode: InputMode::Wall };
        assert_eq!(err.to_string(), "not accepted in wall mode");
    }
}
