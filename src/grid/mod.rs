//! Player grids.
//!
//! Each player owns a fixed 3×4 grid of cells. Cells start face-down, can be
//! turned face-up by a flip or a replacement, and a column of three equal
//! face-up cards is removed for the rest of the round.

pub mod cell;
#[allow(clippy::module_inception)]
pub mod grid;

pub use cell::{Cell, GridPos};
pub use grid::{Grid, Positions};
