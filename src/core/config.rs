//! Game configuration.
//!
//! Callers describe a match with a `GameConfig` and hand it to
//! [`create_initial_state`](crate::core::create_initial_state). The board
//! size is validated at that point.

use serde::{Deserialize, Serialize};

use super::board::BoardSize;
use super::player::PlayerId;
use crate::error::EngineError;

/// Who controls player 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    PlayerVsPlayer,
    /// Player 2 is flagged as computer-controlled.
    PlayerVsComputer,
}

impl GameMode {
    /// Whether `player` is computer-controlled in this mode.
    #[must_use]
    pub fn is_ai(self, player: PlayerId) -> bool {
        matches!(self, GameMode::PlayerVsComputer) && player == PlayerId::Two
    }
}

/// Strength hint for an external move-selection consumer.
///
/// The engine stores it but never selects moves itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::str::FromStr for AiLevel {
    type Err = EngineError;

    /// Accepts "easy", "medium" or "hard", in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(AiLevel::Easy),
            "medium" => Ok(AiLevel::Medium),
            "hard" => Ok(AiLevel::Hard),
            _ => Err(EngineError::UnknownAiLevel { name: s.to_string() }),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Requested side length; validated when the state is built.
    pub board_size: u8,
    pub mode: GameMode,
    pub ai_level: AiLevel,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::STANDARD.into(),
            mode: GameMode::default(),
            ai_level: AiLevel::default(),
        }
    }
}

impl GameConfig {
    /// A player-vs-player game on an `n`×`n` board.
    #[must_use]
    pub fn new(board_size: u8) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Set the game mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the AI level hint.
    #[must_use]
    pub fn with_ai_level(mut self, level: AiLevel) -> Self {
        self.ai_level = level;
        self
    }
}
