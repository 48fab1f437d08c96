//! Wall geometry.
//!
//! A wall is addressed by the grid intersection at its top-left corner and
//! always spans two cell edges:
//!
//! - Horizontal `(x, y)` sits between rows `y` and `y + 1`, covering
//!   columns `x` and `x + 1`.
//! - Vertical `(x, y)` sits between columns `x` and `x + 1`, covering
//!   rows `y` and `y + 1`.
//!
//! The same two-span footprint drives both the overlap rule and the
//! movement-blocking rule, so the two can never disagree.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for WallOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WallOrientation::Horizontal => write!(f, "horizontal"),
            WallOrientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Anchor of a wall (or of a single unit segment during selection).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallPosition {
    pub x: i32,
    pub y: i32,
    pub orientation: WallOrientation,
}

/// A single unit segment, as picked in the two-stage selection UI.
pub type WallSegment = WallPosition;

impl WallPosition {
    #[must_use]
    pub const fn new(x: i32, y: i32, orientation: WallOrientation) -> Self {
        Self { x, y, orientation }
    }

    #[must_use]
    pub const fn horizontal(x: i32, y: i32) -> Self {
        Self::new(x, y, WallOrientation::Horizontal)
    }

    #[must_use]
    pub const fn vertical(x: i32, y: i32) -> Self {
        Self::new(x, y, WallOrientation::Vertical)
    }

    /// Coordinate that stays constant along the wall (y for horizontal).
    #[must_use]
    pub const fn fixed_coord(self) -> i32 {
        match self.orientation {
            WallOrientation::Horizontal => self.y,
            WallOrientation::Vertical => self.x,
        }
    }

    /// Coordinate the wall extends along (x for horizontal).
    #[must_use]
    pub const fn varying_coord(self) -> i32 {
        match self.orientation {
            WallOrientation::Horizontal => self.x,
            WallOrientation::Vertical => self.y,
        }
    }

    /// Two same-orientation walls overlap when collinear and less than two
    /// segments apart. Crossing walls never overlap.
    #[must_use]
    pub fn overlaps(self, other: WallPosition) -> bool {
        self.orientation == other.orientation
            && self.fixed_coord() == other.fixed_coord()
            && (self.varying_coord() - other.varying_coord()).abs() <= 1
    }

    /// True if this wall sits on the edge between adjacent cells `a` and `b`.
    ///
    /// Non-adjacent pairs are never blocked.
    #[must_use]
    pub fn blocks(self, a: Position, b: Position) -> bool {
        if !a.is_adjacent(b) {
            return false;
        }

        if a.y == b.y {
            // Column boundary between min(x) and min(x)+1 on row a.y.
            let col = a.x.min(b.x);
            self.orientation == WallOrientation::Vertical
                && self.x == col
                && (self.y == a.y || self.y == a.y - 1)
        } else {
            // Row boundary between min(y) and min(y)+1 on column a.x.
            let row = a.y.min(b.y);
            self.orientation == WallOrientation::Horizontal
                && self.y == row
                && (self.x == a.x || self.x == a.x - 1)
        }
    }

    /// If `other` is the collinear neighbour segment of `self`, the anchor
    /// of the two-segment wall they form.
    #[must_use]
    pub fn pair_with(self, other: WallSegment) -> Option<WallPosition> {
        let collinear = self.orientation == other.orientation
            && self.fixed_coord() == other.fixed_coord()
            && (self.varying_coord() - other.varying_coord()).abs() == 1;

        collinear.then(|| WallPosition::new(self.x.min(other.x), self.y.min(other.y), self.orientation))
    }
}

impl std::fmt::Display for WallPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wall at ({}, {})", self.orientation, self.x, self.y)
    }
}

/// Identifier of a placed wall, unique within a game.
///
/// Walls are never removed, so the 1-based placement index is unique.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallId(pub u32);

impl WallId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for WallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wall-{}", self.0)
    }
}

/// A committed wall. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub id: WallId,
    pub position: WallPosition,
    pub owner: PlayerId,
}

impl Wall {
    #[must_use]
    pub fn new(id: WallId, position: WallPosition, owner: PlayerId) -> Self {
        Self { id, position, owner }
    }
}
