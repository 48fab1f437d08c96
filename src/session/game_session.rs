//! A single match as seen by an interactive front end.
//!
//! `GameSession` owns one `GameState` and the UI-facing bits that sit
//! around it: which input mode is active, the two-stage wall selection,
//! and the highlighted destinations for whoever is to move. Each session
//! is independent; concurrent matches each get their own.

use tracing::{debug, instrument};

use super::selection::{SelectionStep, WallSelection};
use crate::core::{create_initial_state, Action, GameConfig, GamePhase, GameState, Position, WallPosition, WallSegment};
use crate::error::EngineError;
use crate::rules::{get_valid_moves, Quoridor, RulesEngine, ValidMoves};

/// What a click on the board means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputMode {
    #[default]
    Move,
    Wall,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputMode::Move => write!(f, "move"),
            InputMode::Wall => write!(f, "wall"),
        }
    }
}

/// What happened after a wall segment was selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WallSelectionOutcome {
    /// Waiting for a partner segment.
    AwaitingSecond { first: WallSegment },
    /// The pair formed a legal wall which is now on the board.
    Placed(WallPosition),
}

/// One match plus its interaction state.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    mode: InputMode,
    selection: WallSelection,
    valid_moves: ValidMoves,
}

impl GameSession {
    /// Start a session for a configured match.
    pub fn new(config: &GameConfig) -> Result<Self, EngineError> {
        Ok(Self::from_state(create_initial_state(config)?))
    }

    /// Wrap an existing snapshot.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        let valid_moves = get_valid_moves(&state, state.current_player);
        Self {
            state,
            mode: InputMode::default(),
            selection: WallSelection::default(),
            valid_moves,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn selection(&self) -> WallSelection {
        self.selection
    }

    /// Destinations available to the player to move.
    #[must_use]
    pub fn valid_moves(&self) -> &[Position] {
        &self.valid_moves
    }

    /// Consume the session, keeping the final snapshot.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    // === Input ===

    /// Switch input mode. Any half-made wall selection is discarded.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.selection = WallSelection::SelectingFirst;
    }

    /// Move the current player's pawn. Only accepted in `Move` mode.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn move_to(&mut self, to: Position) -> Result<&GameState, EngineError> {
        self.accepts(InputMode::Move)?;
        let player = self.state.current_player;
        let next = Quoridor.apply_action(&self.state, player, &Action::Step(to))?;
        self.commit(next);
        Ok(&self.state)
    }

    /// Feed one clicked wall segment for the current player. Only accepted
    /// in `Wall` mode while the game is live; a refused click leaves the
    /// selection as it was.
    ///
    /// On a failed placement both segments are discarded and the error is
    /// returned; the turn stays with the same player.
    #[instrument(skip(self), fields(player = %self.state.current_player, stage = self.selection.stage()))]
    pub fn select_wall_segment(&mut self, segment: WallSegment) -> Result<WallSelectionOutcome, EngineError> {
        self.accepts(InputMode::Wall)?;
        match self.selection.select(segment) {
            SelectionStep::Pending(selection) => {
                self.selection = selection;
                Ok(WallSelectionOutcome::AwaitingSecond { first: segment })
            }
            SelectionStep::Paired(wall) => {
                self.selection = WallSelection::SelectingFirst;
                let player = self.state.current_player;
                let next = Quoridor.apply_action(&self.state, player, &Action::PlaceWall(wall))?;
                self.commit(next);
                Ok(WallSelectionOutcome::Placed(wall))
            }
        }
    }

    // === Phase ===

    pub fn start(&mut self) -> Result<(), EngineError> {
        self.state = self.state.start()?;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), EngineError> {
        self.state = self.state.pause()?;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), EngineError> {
        self.state = self.state.resume()?;
        Ok(())
    }

    /// Refuse input for a dead game or the wrong input mode.
    fn accepts(&self, mode: InputMode) -> Result<(), EngineError> {
        match self.state.phase {
            GamePhase::Finished => return Err(EngineError::GameOver),
            GamePhase::Paused => return Err(EngineError::GamePaused),
            GamePhase::Waiting | GamePhase::Playing => {}
        }
        if self.mode != mode {
            debug!(active = %self.mode, wanted = %mode, "input refused");
            return Err(EngineError::WrongInputMode { mode: self.mode });
        }
        Ok(())
    }

    fn commit(&mut self, next: GameState) {
        self.state = next;
        self.valid_moves = if self.state.is_finished() {
            ValidMoves::new()
        } else {
            get_valid_moves(&self.state, self.state.current_player)
        };
        debug!(
            current = %self.state.current_player,
            moves = self.valid_moves.len(),
            "session advanced"
        );
    }
}
