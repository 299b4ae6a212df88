//! A player's 3×4 grid: reveals, replacements, column clears and scoring.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, GridPos};
use crate::core::config::{CardValue, GRID_CELLS, GRID_COLS, GRID_ROWS};
use crate::core::error::{GameError, Result};

/// Positions of a grid, small enough to stay on the stack.
pub type Positions = SmallVec<[GridPos; GRID_CELLS]>;

/// Fixed 3 rows × 4 columns of cells owned by one player.
///
/// ## Scoring
///
/// - `visible_score`: face-up, non-removed cells. What the table sees
///   mid-round.
/// - `round_score`: every non-removed cell, face-up or not. What is folded
///   into the total at round end.
///
/// ## Example
///
/// ```
/// use skyjo::grid::{Grid, GridPos};
///
/// let mut grid = Grid::from_rows([[5, 1, 2, 3], [5, 4, 4, 4], [5, 0, 0, 0]]);
/// for row in 0..3 {
///     grid.flip(GridPos::new(row, 0)).unwrap();
/// }
///
/// assert_eq!(grid.clear_columns().as_slice(), &[0]);
/// assert_eq!(grid.round_score(), 1 + 2 + 3 + 4 * 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; GRID_COLS]; GRID_ROWS],
}

impl Grid {
    /// Lay out twelve face-down cards, row-major.
    #[must_use]
    pub fn from_values(values: [CardValue; GRID_CELLS]) -> Self {
        let mut cells = [[Cell::default(); GRID_COLS]; GRID_ROWS];
        for (i, value) in values.into_iter().enumerate() {
            cells[i / GRID_COLS][i % GRID_COLS] = Cell::hidden(value);
        }
        Self { cells }
    }

    /// Lay out face-down cards row by row.
    #[must_use]
    pub fn from_rows(rows: [[CardValue; GRID_COLS]; GRID_ROWS]) -> Self {
        Self {
            cells: rows.map(|row| row.map(Cell::hidden)),
        }
    }

    #[must_use]
    pub fn cell(&self, pos: GridPos) -> Option<&Cell> {
        self.cells.get(pos.row)?.get(pos.col)
    }

    /// Rows of cells, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; GRID_COLS]; GRID_ROWS] {
        &self.cells
    }

    /// Every cell with its position, row-major. Includes removed cells.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &Cell)> + '_ {
        GridPos::all().map(move |pos| (pos, &self.cells[pos.row][pos.col]))
    }

    /// Every card value still sitting in the grid, removed cells included.
    pub fn values(&self) -> impl Iterator<Item = CardValue> + '_ {
        self.iter().map(|(_, cell)| cell.value)
    }

    fn cell_mut(&mut self, pos: GridPos) -> Result<&mut Cell> {
        if !pos.in_bounds() {
            return Err(GameError::OutOfBounds(pos));
        }
        Ok(&mut self.cells[pos.row][pos.col])
    }

    /// Turn a face-down card face-up.
    ///
    /// Fails if the cell is out of bounds, already face-up, or removed.
    pub fn flip(&mut self, pos: GridPos) -> Result<CardValue> {
        let cell = self.cell_mut(pos)?;
        if !cell.is_hidden() {
            return Err(GameError::CellUnavailable(pos));
        }
        cell.face_up = true;
        Ok(cell.value)
    }

    /// Put `value` into the cell face-up and return the card it displaced.
    ///
    /// Face-up targets are allowed; removed cells are not.
    pub fn replace(&mut self, pos: GridPos, value: CardValue) -> Result<CardValue> {
        let cell = self.cell_mut(pos)?;
        if cell.removed {
            return Err(GameError::CellRemoved(pos));
        }
        let old = cell.value;
        cell.value = value;
        cell.face_up = true;
        Ok(old)
    }

    /// Remove every column whose three cells are face-up, in play and equal.
    ///
    /// Returns the cleared column indices. Running it again on the same grid
    /// clears nothing more.
    pub fn clear_columns(&mut self) -> SmallVec<[usize; GRID_COLS]> {
        let mut cleared = SmallVec::new();
        for col in 0..GRID_COLS {
            let first = self.cells[0][col];
            let matching = (0..GRID_ROWS).all(|row| {
                let cell = self.cells[row][col];
                cell.is_visible_scoring() && cell.value == first.value
            });
            if matching {
                for row in 0..GRID_ROWS {
                    self.cells[row][col].removed = true;
                }
                cleared.push(col);
            }
        }
        cleared
    }

    /// Turn up every remaining face-down card. Runs no column clear.
    pub fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if !cell.removed {
                cell.face_up = true;
            }
        }
    }

    /// Face-down cells still in play.
    #[must_use]
    pub fn hidden_positions(&self) -> Positions {
        self.iter()
            .filter(|(_, cell)| cell.is_hidden())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Cells a held card may replace.
    #[must_use]
    pub fn open_positions(&self) -> Positions {
        self.iter()
            .filter(|(_, cell)| !cell.removed)
            .map(|(pos, _)| pos)
            .collect()
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_hidden()).count()
    }

    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.removed).count()
    }

    /// No face-down card left in play.
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.hidden_count() == 0
    }

    /// Sum of face-up, non-removed cells.
    #[must_use]
    pub fn visible_score(&self) -> i32 {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_visible_scoring())
            .map(|cell| i32::from(cell.value))
            .sum()
    }

    /// Sum of every non-removed cell, face-up or face-down.
    #[must_use]
    pub fn round_score(&self) -> i32 {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_scoring())
            .map(|cell| i32::from(cell.value))
            .sum()
    }
}
