//! Game state snapshot.
//!
//! ## GameState
//!
//! The aggregate value every rule operates on:
//! - Phase, current player, winner
//! - Both players (position, wall budget)
//! - Walls in placement order
//! - Move history
//!
//! Uses `im` persistent vectors so cloning a snapshot is cheap and the
//! rule functions can return a fresh state that shares structure with
//! the one they were given.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::board::BoardSize;
use super::config::{AiLevel, GameConfig, GameMode};
use super::player::{Player, PlayerId, PlayerMap};
use super::position::Position;
use super::wall::Wall;
use crate::error::EngineError;

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, no action committed yet.
    #[default]
    Waiting,
    Playing,
    /// A player reached their goal row. Terminal.
    Finished,
    Paused,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub mode: GameMode,
    pub ai_level: AiLevel,

    /// Whose turn it is.
    pub current_player: PlayerId,

    pub players: PlayerMap<Player>,

    /// Walls in placement order.
    pub walls: Vector<Wall>,

    /// Set exactly when `phase` is `Finished`.
    pub winner: Option<PlayerId>,

    /// Append-only record of committed actions.
    pub move_history: Vector<Move>,

    pub board_size: BoardSize,
}

/// Build the opening snapshot for a configured match.
pub fn create_initial_state(config: &GameConfig) -> Result<GameState, EngineError> {
    let board = BoardSize::new(config.board_size)?;
    let mut state = GameState::new(board, config.mode);
    state.ai_level = config.ai_level;
    Ok(state)
}

impl GameState {
    /// Create a new game: both pawns on their start rows, full wall budgets,
    /// player 1 to move, phase `Waiting`.
    #[must_use]
    pub fn new(board_size: BoardSize, mode: GameMode) -> Self {
        Self {
            phase: GamePhase::Waiting,
            mode,
            ai_level: AiLevel::default(),
            current_player: PlayerId::One,
            players: PlayerMap::new(|id| Player::new(id, board_size, mode.is_ai(id))),
            walls: Vector::new(),
            winner: None,
            move_history: Vector::new(),
            board_size,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn position(&self, id: PlayerId) -> Position {
        self.players[id].position
    }

    #[must_use]
    pub fn walls_left(&self, id: PlayerId) -> u8 {
        self.players[id].walls_left
    }

    /// Which player, if any, stands on `pos`.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, player)| player.position == pos)
            .map(|(id, _)| id)
    }

    /// Number of walls `id` has placed so far.
    #[must_use]
    pub fn walls_placed_by(&self, id: PlayerId) -> usize {
        self.walls.iter().filter(|wall| wall.owner == id).count()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    // === Phase Transitions ===

    /// Waiting → Playing.
    pub fn start(&self) -> Result<GameState, EngineError> {
        self.transition(GamePhase::Waiting, GamePhase::Playing)
    }

    /// Playing → Paused.
    pub fn pause(&self) -> Result<GameState, EngineError> {
        self.transition(GamePhase::Playing, GamePhase::Paused)
    }

    /// Paused → Playing.
    pub fn resume(&self) -> Result<GameState, EngineError> {
        self.transition(GamePhase::Paused, GamePhase::Playing)
    }

    fn transition(&self, from: GamePhase, to: GamePhase) -> Result<GameState, EngineError> {
        if self.phase != from {
            return Err(EngineError::InvalidPhaseTransition {
                from: self.phase,
                to,
            });
        }
        let mut next = self.clone();
        next.phase = to;
        Ok(next)
    }

    // === Bookkeeping ===

    /// Hand the turn to the other player.
    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Record a committed action.
    pub(crate) fn record(&mut self, entry: Move) {
        self.move_history.push_back(entry);
    }
}
