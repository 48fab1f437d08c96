//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Quoridor is strictly two-player, so `PlayerId` is a closed enum
//! rather than an open index.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::BoardSize;
use super::position::Position;

/// One of the two players.
///
/// Player 1 starts on the bottom row (y = N−1) and races to row 0.
/// Player 2 starts on the top row (y = 0) and races to row N−1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players, in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Build from the 1-based number used in the UI and history.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// The 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Slot index (0-based) for `PlayerMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Row this player must reach to win.
    #[must_use]
    pub fn goal_row(self, board: BoardSize) -> i32 {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => board.get() - 1,
        }
    }

    /// Cell this player occupies when a game begins.
    #[must_use]
    pub fn start_position(self, board: BoardSize) -> Position {
        let x = board.center();
        match self {
            PlayerId::One => Position::new(x, board.get() - 1),
            PlayerId::Two => Position::new(x, 0),
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A pawn on the board together with its remaining wall budget.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub position: Position,
    /// Never replenished; decremented once per placed wall.
    pub walls_left: u8,
    pub is_ai: bool,
}

impl Player {
    /// A player at their start cell with a full budget.
    #[must_use]
    pub fn new(id: PlayerId, board: BoardSize, is_ai: bool) -> Self {
        Self {
            id,
            position: id.start_position(board),
            walls_left: board.wall_budget(),
            is_ai,
        }
    }
}

/// Per-player data storage with one slot per `PlayerId`.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{PlayerId, PlayerMap};
///
/// let mut walls: PlayerMap<u8> = PlayerMap::new(|_| 9);
/// walls[PlayerId::Two] -= 1;
///
/// assert_eq!(walls[PlayerId::One], 9);
/// assert_eq!(walls[PlayerId::Two], 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
