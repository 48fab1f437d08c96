//! Rules engine trait and the Quoridor implementation.
//!
//! The free functions in [`movement`](super::movement) and
//! [`walls`](super::walls) judge a single action in isolation. The engine
//! layers match rules on top: turn order, phase gating, and a single
//! `Action` entry point for callers that do not care which kind of turn
//! they are applying.

use tracing::{debug, instrument};

use super::movement::{execute_player_move, get_valid_moves};
use super::walls::{execute_wall_placement, valid_wall_placements};
use crate::core::{Action, GamePhase, GameState, PlayerId};
use crate::error::EngineError;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if player can't act
/// - `apply_action`: Must be deterministic and must not mutate `state`
/// - `winner`: Return None while the game continues
pub trait RulesEngine {
    /// Every action `player` may take right now.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Apply an action, producing the next state.
    fn apply_action(&self, state: &GameState, player: PlayerId, action: &Action) -> Result<GameState, EngineError>;

    /// The winner, if the game is over.
    fn winner(&self, state: &GameState) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> bool {
        self.winner(state).is_some()
    }

    /// Legal actions for whoever is to move.
    fn legal_actions_for_current(&self, state: &GameState) -> Vec<Action> {
        self.legal_actions(state, state.current_player)
    }
}

/// Standard two-player Quoridor.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quoridor;

impl Quoridor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Phase and turn checks shared by every action.
    fn check_turn(state: &GameState, player: PlayerId) -> Result<(), EngineError> {
        match state.phase {
            GamePhase::Finished => return Err(EngineError::GameOver),
            GamePhase::Paused => return Err(EngineError::GamePaused),
            GamePhase::Waiting | GamePhase::Playing => {}
        }
        if state.current_player != player {
            return Err(EngineError::NotYourTurn { player });
        }
        Ok(())
    }
}

impl RulesEngine for Quoridor {
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if Self::check_turn(state, player).is_err() {
            return vec![];
        }

        let steps = get_valid_moves(state, player).into_iter().map(Action::Step);
        let walls = valid_wall_placements(state, player).into_iter().map(Action::PlaceWall);
        steps.chain(walls).collect()
    }

    #[instrument(skip(self, state), fields(phase = ?state.phase))]
    fn apply_action(&self, state: &GameState, player: PlayerId, action: &Action) -> Result<GameState, EngineError> {
        if let Err(err) = Self::check_turn(state, player) {
            debug!(%err, "action refused");
            return Err(err);
        }

        let mut next = match *action {
            Action::Step(to) => execute_player_move(state, player, to)?,
            Action::PlaceWall(wall) => execute_wall_placement(state, player, wall)?,
        };

        if next.phase == GamePhase::Waiting {
            next.phase = GamePhase::Playing;
        }
        Ok(next)
    }

    fn winner(&self, state: &GameState) -> Option<PlayerId> {
        state.winner
    }
}
