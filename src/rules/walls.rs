//! Wall placement: validation, execution and enumeration.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. the placer still has a wall to spend
//! 2. the anchor lies in the `[0, N−2]²` intersection grid
//! 3. no existing wall overlaps it
//! 4. both players can still reach their goal rows with it in place

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::pathing::reaches_row;
use crate::core::{GameState, Move, PlayerId, Wall, WallId, WallOrientation, WallPosition};
use crate::error::{EngineError, WallRejection};

/// Outcome of checking a wall placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallValidation {
    pub is_valid: bool,
    pub reason: Option<WallRejection>,
    /// Set only when the wall was refused for cutting off a player.
    pub blocks_path: bool,
}

impl WallValidation {
    fn accepted() -> Self {
        Self {
            is_valid: true,
            reason: None,
            blocks_path: false,
        }
    }

    fn rejected(reason: WallRejection) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
            blocks_path: reason.blocks_path(),
        }
    }
}

/// Check whether `player` may place a wall at `wall`.
#[must_use]
pub fn validate_wall_placement(state: &GameState, player: PlayerId, wall: WallPosition) -> WallValidation {
    match check(state, player, wall) {
        Ok(()) => WallValidation::accepted(),
        Err(reason) => WallValidation::rejected(reason),
    }
}

fn check(state: &GameState, player: PlayerId, wall: WallPosition) -> Result<(), WallRejection> {
    if state.walls_left(player) == 0 {
        return Err(WallRejection::NoWallsRemaining);
    }
    if !state.board_size.contains_wall(wall) {
        return Err(WallRejection::OutOfBounds);
    }
    if state.walls.iter().any(|existing| existing.position.overlaps(wall)) {
        return Err(WallRejection::Overlaps);
    }

    let mut tentative = state.walls.clone();
    tentative.push_back(Wall::new(WallId::new(0), wall, player));
    for id in PlayerId::ALL {
        let reachable = reaches_row(
            state.board_size,
            &tentative,
            state.position(id),
            id.goal_row(state.board_size),
        );
        if !reachable {
            return Err(WallRejection::BlocksPath(id));
        }
    }

    Ok(())
}

/// Place a wall for `player`, returning the new state.
#[instrument(skip(state), fields(walls_left = state.walls_left(player)))]
pub fn execute_wall_placement(state: &GameState, player: PlayerId, wall: WallPosition) -> Result<GameState, EngineError> {
    if let Err(rejection) = check(state, player, wall) {
        debug!(%rejection, "wall rejected");
        return Err(EngineError::invalid_wall(rejection));
    }

    let mut next = state.clone();
    let id = WallId::new(next.walls.len() as u32 + 1);
    next.walls.push_back(Wall::new(id, wall, player));
    next.players[player].walls_left -= 1;
    next.record(Move::WallMove { player, position: wall });
    next.pass_turn();

    debug!(%id, next_player = %next.current_player, "wall committed");
    Ok(next)
}

/// Every wall `player` could legally place right now.
///
/// Ordered horizontal before vertical, then row by row.
#[must_use]
pub fn valid_wall_placements(state: &GameState, player: PlayerId) -> Vec<WallPosition> {
    if state.walls_left(player) == 0 {
        return Vec::new();
    }

    let max = state.board_size.max_wall_coord();
    [WallOrientation::Horizontal, WallOrientation::Vertical]
        .into_iter()
        .flat_map(|orientation| {
            (0..=max).flat_map(move |y| (0..=max).map(move |x| WallPosition::new(x, y, orientation)))
        })
        .filter(|&wall| check(state, player, wall).is_ok())
        .collect()
}
