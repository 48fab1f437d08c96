//! Requested actions and recorded moves.
//!
//! An `Action` is what a player asks for; a `Move` is the history entry
//! written once the action has been committed. History entries are
//! append-only and never mutated.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;
use super::wall::WallPosition;

/// A turn a player may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the pawn to a cell (orthogonal step, jump or diagonal jump).
    Step(Position),
    /// Place a two-segment wall anchored at the given position.
    PlaceWall(WallPosition),
}

impl Action {
    #[must_use]
    pub fn is_step(&self) -> bool {
        matches!(self, Action::Step(_))
    }

    #[must_use]
    pub fn is_wall(&self) -> bool {
        matches!(self, Action::PlaceWall(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Step(to) => write!(f, "move to {to}"),
            Action::PlaceWall(wall) => write!(f, "place {wall}"),
        }
    }
}

/// A committed history entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    PlayerMove {
        player: PlayerId,
        from: Position,
        to: Position,
    },
    WallMove {
        player: PlayerId,
        position: WallPosition,
    },
}

impl Move {
    /// The player who acted.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Move::PlayerMove { player, .. } | Move::WallMove { player, .. } => *player,
        }
    }

    /// The action that produced this entry.
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Move::PlayerMove { to, .. } => Action::Step(*to),
            Move::WallMove { position, .. } => Action::PlaceWall(*position),
        }
    }
}
