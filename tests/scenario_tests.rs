//! Rule scenarios on concrete boards.
//!
//! Each test sets up a position by hand and checks the engine's answer
//! against the expected rule outcome.

use quoridor_engine::core::{BoardSize, GameMode, GamePhase, GameState, PlayerId, Position, WallPosition};
use quoridor_engine::error::WallRejection;
use quoridor_engine::rules::{
    execute_player_move, execute_wall_placement, get_valid_moves, has_path_to_goal, validate_player_move,
    validate_wall_placement,
};

fn board(size: u8) -> GameState {
    GameState::new(BoardSize::new(size).unwrap(), GameMode::PlayerVsPlayer)
}

fn set_positions(state: &mut GameState, one: (i32, i32), two: (i32, i32)) {
    state.players[PlayerId::One].position = one.into();
    state.players[PlayerId::Two].position = two.into();
}

fn sorted(positions: impl IntoIterator<Item = Position>) -> Vec<Position> {
    let mut v: Vec<_> = positions.into_iter().collect();
    v.sort();
    v
}

fn cells(list: &[(i32, i32)]) -> Vec<Position> {
    sorted(list.iter().map(|&p| Position::from(p)))
}

/// Place walls one after another, alternating the owner, asserting each is legal.
fn build(mut state: GameState, walls: &[WallPosition]) -> GameState {
    for (i, &wall) in walls.iter().enumerate() {
        let owner = if i % 2 == 0 { PlayerId::One } else { PlayerId::Two };
        state = execute_wall_placement(&state, owner, wall)
            .unwrap_or_else(|e| panic!("setup wall {wall} rejected: {e}"));
    }
    state
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn test_opening_moves_player_one() {
    let state = board(9);
    assert_eq!(
        sorted(get_valid_moves(&state, PlayerId::One)),
        cells(&[(3, 8), (5, 8), (4, 7)])
    );
}

#[test]
fn test_opening_moves_are_symmetric() {
    let state = board(9);
    assert_eq!(
        sorted(get_valid_moves(&state, PlayerId::Two)),
        cells(&[(3, 0), (5, 0), (4, 1)])
    );
}

#[test]
fn test_opening_moves_small_boards() {
    for size in [3u8, 5, 7, 11] {
        let state = board(size);
        for player in PlayerId::ALL {
            assert_eq!(get_valid_moves(&state, player).len(), 3, "{size}x{size} {player}");
        }
    }
}

#[test]
fn test_jump_off_board_falls_back_to_diagonals() {
    let mut state = board(9);
    set_positions(&mut state, (4, 1), (4, 0));

    assert_eq!(
        sorted(get_valid_moves(&state, PlayerId::One)),
        cells(&[(3, 1), (5, 1), (4, 2), (3, 0), (5, 0)])
    );
}

#[test]
fn test_diagonal_on_board_edge_keeps_one_side() {
    let mut state = board(9);
    set_positions(&mut state, (0, 1), (0, 0));

    assert_eq!(
        sorted(get_valid_moves(&state, PlayerId::One)),
        cells(&[(1, 1), (0, 2), (1, 0)])
    );
}

#[test]
fn test_sideways_jump() {
    let mut state = board(9);
    set_positions(&mut state, (3, 4), (4, 4));

    let moves = get_valid_moves(&state, PlayerId::One);
    assert!(moves.contains(&Position::new(5, 4)));
    assert!(!moves.contains(&Position::new(4, 4)));
}

#[test]
fn test_winning_move_finishes_and_still_passes_turn() {
    let mut state = board(9);
    set_positions(&mut state, (4, 1), (0, 8));

    let next = execute_player_move(&state, PlayerId::One, Position::new(4, 0)).unwrap();

    assert_eq!(next.phase, GamePhase::Finished);
    assert_eq!(next.winner, Some(PlayerId::One));
    assert_eq!(next.current_player, PlayerId::Two);
    assert_eq!(next.position(PlayerId::One).y, PlayerId::One.goal_row(next.board_size));
}

#[test]
fn test_move_validation_does_not_mutate() {
    let state = board(9);
    let before = state.clone();

    let a = validate_player_move(&state, PlayerId::One, Position::new(4, 7));
    let b = validate_player_move(&state, PlayerId::One, Position::new(4, 7));

    assert_eq!(a, b);
    assert_eq!(state, before);
}

// =============================================================================
// Walls
// =============================================================================

#[test]
fn test_adjacent_collinear_walls_overlap() {
    let state = build(board(9), &[WallPosition::horizontal(2, 3)]);
    let v = validate_wall_placement(&state, PlayerId::Two, WallPosition::horizontal(3, 3));

    assert!(!v.is_valid);
    assert_eq!(v.reason, Some(WallRejection::Overlaps));
    assert!(!v.blocks_path);
}

#[test]
fn test_sealing_last_lane_is_rejected() {
    let mut state = board(9);
    // Player 1 is already past the barrier; only player 2 can be trapped.
    set_positions(&mut state, (8, 2), (4, 0));

    // Barrier between rows 3 and 4 over columns 1..=8, leaving column 0,
    // then a floor under the pocket below the gap.
    let state = build(
        state,
        &[
            WallPosition::horizontal(1, 3),
            WallPosition::horizontal(3, 3),
            WallPosition::horizontal(5, 3),
            WallPosition::horizontal(7, 3),
            WallPosition::horizontal(0, 5),
        ],
    );
    assert!(has_path_to_goal(&state, PlayerId::Two));

    let v = validate_wall_placement(&state, PlayerId::One, WallPosition::vertical(0, 4));
    assert!(!v.is_valid);
    assert!(v.blocks_path);
    assert_eq!(v.reason, Some(WallRejection::BlocksPath(PlayerId::Two)));

    assert!(execute_wall_placement(&state, PlayerId::One, WallPosition::vertical(0, 4)).is_err());
}

#[test]
fn test_crossing_wall_is_accepted() {
    let state = build(board(9), &[WallPosition::horizontal(4, 4)]);
    let v = validate_wall_placement(&state, PlayerId::Two, WallPosition::vertical(4, 4));
    assert!(v.is_valid);
}

#[test]
fn test_budget_runs_out() {
    let mut state = board(5);
    let walls = [
        WallPosition::vertical(0, 0),
        WallPosition::vertical(0, 2),
        WallPosition::vertical(2, 0),
        WallPosition::vertical(2, 2),
        WallPosition::vertical(3, 0),
    ];
    for wall in walls {
        state = execute_wall_placement(&state, PlayerId::One, wall).unwrap();
    }

    assert_eq!(state.walls_left(PlayerId::One), 0);
    let v = validate_wall_placement(&state, PlayerId::One, WallPosition::horizontal(0, 3));
    assert_eq!(v.reason, Some(WallRejection::NoWallsRemaining));
    assert!(validate_wall_placement(&state, PlayerId::Two, WallPosition::horizontal(0, 3)).is_valid);
}
