//! Pawn movement: legal destinations, validation and execution.
//!
//! From its cell a pawn may step to any open orthogonal neighbour. If that
//! neighbour holds the opponent it jumps straight over; when the straight
//! jump is off the board or walled, it may instead land on either cell
//! beside the opponent.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::pathing::is_wall_between;
use crate::core::{Direction, GamePhase, GameState, Move, PlayerId, Position};
use crate::error::{EngineError, MoveRejection};

/// Legal destinations. At most five: three steps plus two diagonals.
pub type ValidMoves = SmallVec<[Position; 6]>;

/// Outcome of checking a pawn move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveValidation {
    pub is_valid: bool,
    pub reason: Option<MoveRejection>,
    /// Every legal destination for the player, valid or not.
    pub valid_moves: ValidMoves,
}

/// Every cell `player` may move to this turn, without duplicates.
#[must_use]
pub fn get_valid_moves(state: &GameState, player: PlayerId) -> ValidMoves {
    let board = state.board_size;
    let walls = &state.walls;
    let from = state.position(player);
    let opponent = state.position(player.opponent());

    let open = |a: Position, b: Position| board.contains(b) && !is_wall_between(walls, a, b);

    let mut moves = ValidMoves::new();
    let mut push = |pos: Position| {
        if !moves.contains(&pos) {
            moves.push(pos);
        }
    };

    for dir in Direction::ALL {
        let next = from.step(dir);
        if !open(from, next) {
            continue;
        }
        if next != opponent {
            push(next);
            continue;
        }

        let jump = next.step(dir);
        if open(next, jump) {
            push(jump);
            continue;
        }

        for side in dir.perpendicular() {
            let diagonal = next.step(side);
            if open(next, diagonal) {
                push(diagonal);
            }
        }
    }

    moves
}

/// Check whether `player` may move to `to`.
#[must_use]
pub fn validate_player_move(state: &GameState, player: PlayerId, to: Position) -> MoveValidation {
    let valid_moves = get_valid_moves(state, player);
    let reason = if valid_moves.contains(&to) {
        None
    } else if !state.board_size.contains(to) {
        Some(MoveRejection::OutOfBounds)
    } else {
        Some(MoveRejection::NotReachable)
    };

    MoveValidation {
        is_valid: reason.is_none(),
        reason,
        valid_moves,
    }
}

/// Move `player` to `to`, returning the new state.
///
/// Reaching the goal row finishes the game; the turn is handed over even
/// then, so history replays stay uniform.
#[instrument(skip(state), fields(from = %state.position(player)))]
pub fn execute_player_move(state: &GameState, player: PlayerId, to: Position) -> Result<GameState, EngineError> {
    let validation = validate_player_move(state, player, to);
    if let Some(reason) = validation.reason {
        debug!(%reason, "move rejected");
        return Err(EngineError::InvalidMove { player, to, reason });
    }

    let mut next = state.clone();
    let from = next.players[player].position;
    next.players[player].position = to;
    next.record(Move::PlayerMove { player, from, to });

    if to.y == player.goal_row(next.board_size) {
        next.phase = GamePhase::Finished;
        next.winner = Some(player);
        debug!(%player, "goal row reached");
    }

    next.pass_turn();
    debug!(next_player = %next.current_player, "move committed");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSize, GameMode, Wall, WallId, WallPosition};

    fn game(size: u8) -> GameState {
        GameState::new(BoardSize::new(size).unwrap(), GameMode::default())
    }

    fn place(state: &mut GameState, pos: WallPosition) {
        let id = WallId::new(state.walls.len() as u32 + 1);
        state.walls.push_back(Wall::new(id, pos, PlayerId::Two));
    }

    fn sorted(moves: ValidMoves) -> Vec<Position> {
        let mut v = moves.into_vec();
        v.sort();
        v
    }

    fn cells(list: &[(i32, i32)]) -> Vec<Position> {
        let mut v: Vec<_> = list.iter().map(|&p| Position::from(p)).collect();
        v.sort();
        v
    }

    #[test]
    fn test_open_center_has_four_moves() {
        let mut state = game(9);
        state.players[PlayerId::One].position = Position::new(4, 4);
        assert_eq!(
            sorted(get_valid_moves(&state, PlayerId::One)),
            cells(&[(4, 3), (4, 5), (3, 4), (5, 4)])
        );
    }

    #[test]
    fn test_corner_has_two_moves() {
        let mut state = game(5);
        state.players[PlayerId::One].position = Position::new(0, 4);
        assert_eq!(sorted(get_valid_moves(&state, PlayerId::One)), cells(&[(0, 3), (1, 4)]));
    }

    #[test]
    fn test_wall_removes_step() {
        let mut state = game(9);
        place(&mut state, WallPosition::horizontal(3, 7));
        assert_eq!(
            sorted(get_valid_moves(&state, PlayerId::One)),
            cells(&[(3, 8), (5, 8)])
        );
    }

    #[test]
    fn test_straight_jump() {
        let mut state = game(9);
        state.players[PlayerId::One].position = Position::new(4, 5);
        state.players[PlayerId::Two].position = Position::new(4, 4);
        assert_eq!(
            sorted(get_valid_moves(&state, PlayerId::One)),
            cells(&[(4, 3), (4, 6), (3, 5), (5, 5)])
        );
    }

    #[test]
    fn test_walled_jump_falls_back_to_diagonals() {
        let mut state = game(9);
        state.players[PlayerId::One].position = Position::new(4, 5);
        state.players[PlayerId::Two].position = Position::new(4, 4);
        place(&mut state, WallPosition::horizontal(4, 3));

        assert_eq!(
            sorted(get_valid_moves(&state, PlayerId::One)),
            cells(&[(3, 4), (5, 4), (4, 6), (3, 5), (5, 5)])
        );
    }

    #[test]
    fn test_diagonal_blocked_by_wall() {
        let mut state = game(9);
        state.players[PlayerId::One].position = Position::new(4, 5);
        state.players[PlayerId::Two].position = Position::new(4, 4);
        place(&mut state, WallPosition::horizontal(4, 3));
        place(&mut state, WallPosition::vertical(4, 3));

        // Vertical wall at (4,3) blocks (4,4)->(5,4); only the left diagonal remains.
        let moves = get_valid_moves(&state, PlayerId::One);
        assert!(moves.contains(&Position::new(3, 4)));
        assert!(!moves.contains(&Position::new(5, 4)));
    }

    #[test]
    fn test_wall_between_pawns_prevents_jump() {
        let mut state = game(9);
        state.players[PlayerId::One].position = Position::new(4, 5);
        state.players[PlayerId::Two].position = Position::new(4, 4);
        place(&mut state, WallPosition::horizontal(3, 4));

        let moves = get_valid_moves(&state, PlayerId::One);
        assert!(!moves.contains(&Position::new(4, 4)));
        assert!(!moves.contains(&Position::new(4, 3)));
        assert!(!moves.contains(&Position::new(3, 4)));
    }

    #[test]
    fn test_validate_reports_reason_and_moves() {
        let state = game(9);
        let ok = validate_player_move(&state, PlayerId::One, Position::new(4, 7));
        assert!(ok.is_valid);
        assert_eq!(ok.reason, None);
        assert_eq!(ok.valid_moves.len(), 3);

        let bad = validate_player_move(&state, PlayerId::One, Position::new(4, 6));
        assert!(!bad.is_valid);
        assert_eq!(bad.reason, Some(MoveRejection::NotReachable));
        assert_eq!(bad.valid_moves, ok.valid_moves);

        let off = validate_player_move(&state, PlayerId::One, Position::new(4, 9));
        assert_eq!(off.reason, Some(MoveRejection::OutOfBounds));
    }

    #[test]
    fn test_execute_updates_position_history_and_turn() {
        let state = game(9);
        let next = execute_player_move(&state, PlayerId::One, Position::new(4, 7)).unwrap();

        assert_eq!(next.position(PlayerId::One), Position::new(4, 7));
        assert_eq!(next.current_player, PlayerId::Two);
        assert_eq!(
            next.move_history.back(),
            Some(&Move::PlayerMove {
                player: PlayerId::One,
                from: Position::new(4, 8),
                to: Position::new(4, 7),
            })
        );
        assert_eq!(next.winner, None);

        // Input untouched.
        assert_eq!(state.position(PlayerId::One), Position::new(4, 8));
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_execute_rejects_invalid() {
        let state = game(9);
        let err = execute_player_move(&state, PlayerId::One, Position::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidMove {
                player: PlayerId::One,
                to: Position::new(0, 0),
                reason: MoveRejection::NotReachable,
            }
        );
    }

    #[test]
    fn test_player_two_wins_on_bottom_row() {
        let mut state = game(5);
        state.players[PlayerId::Two].position = Position::new(0, 3);
        state.current_player = PlayerId::Two;

        let next = execute_player_move(&state, PlayerId::Two, Position::new(0, 4)).unwrap();
        assert_eq!(next.phase, GamePhase::Finished);
        assert_eq!(next.winner, Some(PlayerId::Two));
        assert_eq!(next.current_player, PlayerId::One);
    }
}
