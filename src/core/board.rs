//! Board dimensions and derived constants.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::wall::WallPosition;
use crate::error::EngineError;

/// Side length of the square board.
///
/// Always at least [`BoardSize::MIN`], so a wall anchor grid of at least
/// 2×2 exists and the two start rows are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BoardSize(u8);

impl BoardSize {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 25;

    /// The standard tournament board.
    pub const STANDARD: BoardSize = BoardSize(9);

    /// Validate a side length.
    pub fn new(size: u8) -> Result<Self, EngineError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(EngineError::InvalidBoardSize { size })
        }
    }

    /// Side length as a signed coordinate bound.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0 as i32
    }

    /// Wall budget per player: floor(N × 1.1).
    #[must_use]
    pub const fn wall_budget(self) -> u8 {
        ((self.0 as u16 * 11) / 10) as u8
    }

    /// Centre column, rounded down on even boards.
    #[must_use]
    pub const fn center(self) -> i32 {
        self.get() / 2
    }

    /// Largest valid wall anchor coordinate (N − 2).
    #[must_use]
    pub const fn max_wall_coord(self) -> i32 {
        self.get() - 2
    }

    /// True if `pos` is a cell on this board.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.get() && pos.y >= 0 && pos.y < self.get()
    }

    /// True if `wall` is anchored inside the `[0, N−2]²` intersection grid.
    #[must_use]
    pub const fn contains_wall(self, wall: WallPosition) -> bool {
        let max = self.max_wall_coord();
        wall.x >= 0 && wall.x <= max && wall.y >= 0 && wall.y <= max
    }

    /// Every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let n = self.get();
        (0..n).flat_map(move |y| (0..n).map(move |x| Position::new(x, y)))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = EngineError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WallOrientation;

    #[test]
    fn test_rejects_tiny_and_huge_boards() {
        assert!(BoardSize::new(2).is_err());
        assert!(BoardSize::new(0).is_err());
        assert!(BoardSize::new(26).is_err());
        assert!(BoardSize::new(3).is_ok());
    }

    #[test]
    fn test_wall_budget() {
        let budget = |n| BoardSize::new(n).unwrap().wall_budget();
        assert_eq!(budget(5), 5);
        assert_eq!(budget(7), 7);
        assert_eq!(budget(9), 9);
        assert_eq!(budget(10), 11);
        assert_eq!(budget(11), 12);
    }

    #[test]
    fn test_contains() {
        let board = BoardSize::STANDARD;
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(8, 8)));
        assert!(!board.contains(Position::new(9, 0)));
        assert!(!board.contains(Position::new(4, -1)));
    }

    #[test]
    fn test_contains_wall() {
        let board = BoardSize::STANDARD;
        let h = |x, y| WallPosition::new(x, y, WallOrientation::Horizontal);
        assert!(board.contains_wall(h(0, 0)));
        assert!(board.contains_wall(h(7, 7)));
        assert!(!board.contains_wall(h(8, 0)));
        assert!(!board.contains_wall(h(0, -1)));
    }

    #[test]
    fn test_cells_count() {
        assert_eq!(BoardSize::new(5).unwrap().cells().count(), 25);
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&BoardSize::STANDARD).unwrap();
        assert_eq!(json, "9");
        assert!(serde_json::from_str::<BoardSize>("2").is_err());
    }
}
