//! Reachability and shortest-path search.
//!
//! All searches are breadth-first over orthogonal steps, pruned by walls.
//! Pawns and jumps are ignored: only walls can cut a player off.

use std::collections::VecDeque;

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::core::{BoardSize, Direction, GameState, PlayerId, Position, Wall};

/// True if any wall sits on the edge between adjacent cells `a` and `b`.
#[must_use]
pub fn is_wall_between(walls: &Vector<Wall>, a: Position, b: Position) -> bool {
    walls.iter().any(|wall| wall.position.blocks(a, b))
}

/// Cells reachable from `cell` in one unobstructed orthogonal step.
fn open_neighbours<'a>(
    board: BoardSize,
    walls: &'a Vector<Wall>,
    cell: Position,
) -> impl Iterator<Item = Position> + 'a {
    Direction::ALL
        .into_iter()
        .map(move |dir| cell.step(dir))
        .filter(move |&next| board.contains(next) && !is_wall_between(walls, cell, next))
}

/// Whether `start` can reach any cell on `goal_row` given `walls`.
#[must_use]
pub fn reaches_row(board: BoardSize, walls: &Vector<Wall>, start: Position, goal_row: i32) -> bool {
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current.y == goal_row {
            trace!(%start, %current, visited = visited.len(), "goal row reached");
            return true;
        }
        for next in open_neighbours(board, walls, current) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    trace!(%start, goal_row, visited = visited.len(), "goal row unreachable");
    false
}

/// Whether `player` can still reach their goal row.
#[must_use]
pub fn has_path_to_goal(state: &GameState, player: PlayerId) -> bool {
    reaches_row(
        state.board_size,
        &state.walls,
        state.position(player),
        player.goal_row(state.board_size),
    )
}

/// Shortest orthogonal route from `player`'s cell to their goal row.
///
/// The start cell is excluded and the first goal-row cell reached is the
/// last element. Empty when unreachable, or when the player already
/// stands on the goal row; use [`distance_to_goal`] to tell them apart.
#[must_use]
pub fn shortest_path_to_goal(state: &GameState, player: PlayerId) -> Vec<Position> {
    let board = state.board_size;
    let start = state.position(player);
    let goal_row = player.goal_row(board);

    let mut parents: FxHashMap<Position, Option<Position>> = FxHashMap::default();
    let mut queue = VecDeque::new();
    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current.y == goal_row {
            let mut path = Vec::new();
            let mut cursor = current;
            while let Some(&Some(parent)) = parents.get(&cursor) {
                path.push(cursor);
                cursor = parent;
            }
            path.reverse();
            return path;
        }
        for next in open_neighbours(board, &state.walls, current) {
            parents.entry(next).or_insert_with(|| {
                queue.push_back(next);
                Some(current)
            });
        }
    }

    Vec::new()
}

/// Number of orthogonal steps to the goal row, `None` if cut off.
#[must_use]
pub fn distance_to_goal(state: &GameState, player: PlayerId) -> Option<usize> {
    if state.position(player).y == player.goal_row(state.board_size) {
        return Some(0);
    }
    let path = shortest_path_to_goal(state, player);
    (!path.is_empty()).then_some(path.len())
}
