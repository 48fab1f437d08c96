//! Two-stage wall selection.
//!
//! A wall covers two unit segments, so the UI collects it in two clicks.
//! The first click stores a segment; the second either completes a
//! collinear pair or replaces the stored segment.

use serde::{Deserialize, Serialize};

use crate::core::{WallOrientation, WallPosition, WallSegment};

/// Where the selection currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSelection {
    #[default]
    SelectingFirst,
    SelectingSecond { first: WallSegment },
}

/// Result of feeding one segment into the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStep {
    /// The segment was stored; waiting for its partner.
    Pending(WallSelection),
    /// The two segments form a wall anchored at the given position.
    Paired(WallPosition),
}

impl WallSelection {
    /// UI stage number: 1 or 2.
    #[must_use]
    pub fn stage(&self) -> u8 {
        match self {
            WallSelection::SelectingFirst => 1,
            WallSelection::SelectingSecond { .. } => 2,
        }
    }

    #[must_use]
    pub fn first_segment(&self) -> Option<WallSegment> {
        match *self {
            WallSelection::SelectingFirst => None,
            WallSelection::SelectingSecond { first } => Some(first),
        }
    }

    /// Feed a clicked segment.
    ///
    /// A pairing result does not reset the selection by itself; the caller
    /// goes back to `SelectingFirst` once it has tried the wall.
    #[must_use]
    pub fn select(self, segment: WallSegment) -> SelectionStep {
        match self {
            WallSelection::SelectingFirst => SelectionStep::Pending(WallSelection::SelectingSecond { first: segment }),
            WallSelection::SelectingSecond { first } => match first.pair_with(segment) {
                Some(wall) => SelectionStep::Paired(wall),
                None => SelectionStep::Pending(WallSelection::SelectingSecond { first: segment }),
            },
        }
    }

    /// Segments that would complete a wall with the stored one.
    ///
    /// Used to highlight second-stage candidates. Bounds are not checked.
    #[must_use]
    pub fn partner_candidates(&self) -> Vec<WallSegment> {
        let Some(first) = self.first_segment() else {
            return Vec::new();
        };
        let (dx, dy) = match first.orientation {
            WallOrientation::Horizontal => (1, 0),
            WallOrientation::Vertical => (0, 1),
        };
        vec![
            WallSegment::new(first.x - dx, first.y - dy, first.orientation),
            WallSegment::new(first.x + dx, first.y + dy, first.orientation),
        ]
    }
}
