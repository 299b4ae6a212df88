//! Cards: building a round's deck from the configured distribution and
//! dealing it out.
//!
//! Cards carry nothing but their face value (`CardValue`), so there is no
//! registry or per-card instance state.

pub mod deck;

pub use deck::{build_deck, deal_grid, deal_round, Deal};
