//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{create_initial_state, Action, GameConfig, GameMode, GameState, Position, WallPosition};
use crate::rules::{self, Quoridor, RulesEngine};

use super::py_core::{parse_ai_level, parse_orientation, parse_player, to_py_err, PyWallPosition};

/// Python wrapper for a Quoridor match.
#[pyclass(name = "Quoridor")]
pub struct PyQuoridor {
    state: GameState,
}

#[pymethods]
impl PyQuoridor {
    /// Create a new match.
    ///
    /// # Arguments
    /// - board_size: Side length (3-25)
    /// - vs_computer: Flag player 2 as computer-controlled
    /// - ai_level: "easy", "medium" or "hard"
    #[new]
    #[pyo3(signature = (board_size = 9, vs_computer = false, ai_level = "medium"))]
    fn new(board_size: u8, vs_computer: bool, ai_level: &str) -> PyResult<Self> {
        let mode = if vs_computer {
            GameMode::PlayerVsComputer
        } else {
            GameMode::PlayerVsPlayer
        };
        let level = parse_ai_level(ai_level)?;
        let config = GameConfig::new(board_size).with_mode(mode).with_ai_level(level);
        let state = create_initial_state(&config).map_err(to_py_err)?;
        Ok(Self { state })
    }

    /// Destinations for the player to move.
    fn valid_moves(&self) -> Vec<(i32, i32)> {
        rules::get_valid_moves(&self.state, self.state.current_player)
            .into_iter()
            .map(|p| (p.x, p.y))
            .collect()
    }

    /// Walls the player to move could place.
    fn valid_walls(&self) -> Vec<PyWallPosition> {
        rules::valid_wall_placements(&self.state, self.state.current_player)
            .into_iter()
            .map(PyWallPosition)
            .collect()
    }

    /// Move the current player's pawn. Raises ValueError if illegal.
    fn move_to(&mut self, x: i32, y: i32) -> PyResult<()> {
        let player = self.state.current_player;
        let action = Action::Step(Position::new(x, y));
        self.state = Quoridor.apply_action(&self.state, player, &action).map_err(to_py_err)?;
        Ok(())
    }

    /// Place a wall for the current player. Raises ValueError if illegal.
    fn place_wall(&mut self, x: i32, y: i32, orientation: &str) -> PyResult<()> {
        let player = self.state.current_player;
        let wall = WallPosition::new(x, y, parse_orientation(orientation)?);
        let action = Action::PlaceWall(wall);
        self.state = Quoridor.apply_action(&self.state, player, &action).map_err(to_py_err)?;
        Ok(())
    }

    fn has_path_to_goal(&self, player: u8) -> PyResult<bool> {
        Ok(rules::has_path_to_goal(&self.state, parse_player(player)?))
    }

    fn shortest_path(&self, player: u8) -> PyResult<Vec<(i32, i32)>> {
        let path = rules::shortest_path_to_goal(&self.state, parse_player(player)?);
        Ok(path.into_iter().map(|p| (p.x, p.y)).collect())
    }

    fn distance_to_goal(&self, player: u8) -> PyResult<Option<usize>> {
        Ok(rules::distance_to_goal(&self.state, parse_player(player)?))
    }

    fn position(&self, player: u8) -> PyResult<(i32, i32)> {
        let pos = self.state.position(parse_player(player)?);
        Ok((pos.x, pos.y))
    }

    fn walls_left(&self, player: u8) -> PyResult<u8> {
        Ok(self.state.walls_left(parse_player(player)?))
    }

    /// Placed walls, in placement order.
    fn walls(&self) -> Vec<PyWallPosition> {
        self.state.walls.iter().map(|w| PyWallPosition(w.position)).collect()
    }

    #[getter]
    fn current_player(&self) -> u8 {
        self.state.current_player.number()
    }

    /// The winner's number, or None while the game continues.
    #[getter]
    fn winner(&self) -> Option<u8> {
        Quoridor.winner(&self.state).map(|p| p.number())
    }

    #[getter]
    fn board_size(&self) -> i32 {
        self.state.board_size.get()
    }

    /// Copy the match for look-ahead.
    fn copy(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = match self.state.winner {
            Some(p) => format!("won by P{}", p.number()),
            None => "ongoing".to_string(),
        };
        format!(
            "Quoridor({}, to_move=P{}, walls={}, status={})",
            self.state.board_size,
            self.state.current_player.number(),
            self.state.walls.len(),
            status
        )
    }
}
