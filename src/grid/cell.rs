//! A single grid slot and its coordinates.

use serde::{Deserialize, Serialize};

use crate::core::config::{CardValue, GRID_COLS, GRID_ROWS};

/// Row/column coordinates inside a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the position lies inside a 3×4 grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < GRID_ROWS && self.col < GRID_COLS
    }

    /// All positions, row-major.
    pub fn all() -> impl Iterator<Item = GridPos> {
        (0..GRID_ROWS).flat_map(|row| (0..GRID_COLS).map(move |col| GridPos::new(row, col)))
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One card slot in a player's grid.
///
/// A cell only ever moves face-down -> face-up, or into `removed`. A removed
/// cell keeps the value and face it had when its column was cleared; it no
/// longer scores and accepts no interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub value: CardValue,
    pub face_up: bool,
    pub removed: bool,
}

impl Cell {
    /// A face-down card.
    #[must_use]
    pub const fn hidden(value: CardValue) -> Self {
        Self {
            value,
            face_up: false,
            removed: false,
        }
    }

    /// A face-up card.
    #[must_use]
    pub const fn revealed(value: CardValue) -> Self {
        Self {
            value,
            face_up: true,
            removed: false,
        }
    }

    /// Still face-down and in play.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.face_up && !self.removed
    }

    /// Counted by round-end scoring.
    #[must_use]
    pub const fn is_scoring(&self) -> bool {
        !self.removed
    }

    /// Counted by the mid-round visible score.
    #[must_use]
    pub const fn is_visible_scoring(&self) -> bool {
        self.face_up && !self.removed
    }
}
