//! Game configuration.
//!
//! A table is configured once, before setup:
//! - the card distribution (value -> count) every round's deck is built from
//! - how many cards each player turns up during the initial reveal
//!
//! Fixed table geometry and limits live here as constants.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Face value printed on a card.
pub type CardValue = i8;

/// Rows in a player's grid.
pub const GRID_ROWS: usize = 3;

/// Columns in a player's grid.
pub const GRID_COLS: usize = 4;

/// Cells in a player's grid.
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

/// Fewest players a game can be created with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can be created with.
pub const MAX_PLAYERS: usize = 6;

/// Lower clamp for the target score.
pub const MIN_TARGET_SCORE: i32 = 30;

/// Upper clamp for the target score.
pub const MAX_TARGET_SCORE: i32 = 500;

/// Target score used when the table does not pick one.
pub const DEFAULT_TARGET_SCORE: i32 = 100;

/// Cards each player reveals before the first turn.
pub const DEFAULT_INITIAL_FLIPS: u8 = 2;

/// Clamp a requested target score into the supported range.
#[must_use]
pub fn clamp_target_score(target: i32) -> i32 {
    target.clamp(MIN_TARGET_SCORE, MAX_TARGET_SCORE)
}

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How many copies of each value the deck contains.
    pub distribution: BTreeMap<CardValue, usize>,

    /// Cards each player flips during the initial reveal.
    pub initial_flips: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameConfig {
    /// Create a configuration from a distribution.
    pub fn new(distribution: impl IntoIterator<Item = (CardValue, usize)>) -> Self {
        let mut merged = BTreeMap::new();
        for (value, count) in distribution {
            *merged.entry(value).or_insert(0) += count;
        }
        Self {
            distribution: merged,
            initial_flips: DEFAULT_INITIAL_FLIPS,
        }
    }

    /// The published 150-card deck.
    ///
    /// -2 ×5, -1 ×10, 0 ×15, and 1 through 12 ×10 each.
    #[must_use]
    pub fn standard() -> Self {
        let mut distribution = vec![(-2, 5), (-1, 10), (0, 15)];
        distribution.extend((1..=12).map(|value| (value, 10)));
        Self::new(distribution)
    }

    /// Set the number of initial-reveal flips.
    #[must_use]
    pub fn with_initial_flips(mut self, flips: u8) -> Self {
        self.initial_flips = flips;
        self
    }

    /// Total number of cards in one round's deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.distribution.values().sum()
    }

    /// Deck composition as a multiset.
    #[must_use]
    pub fn composition(&self) -> FxHashMap<CardValue, usize> {
        self.distribution
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(&value, &count)| (value, count))
            .collect()
    }

    /// Cards needed to deal a round: a full grid per player plus the
    /// discard turn-up.
    #[must_use]
    pub fn cards_needed(player_count: usize) -> usize {
        GRID_CELLS * player_count + 1
    }

    /// How many players this distribution can deal, capped at `MAX_PLAYERS`.
    #[must_use]
    pub fn max_players(&self) -> usize {
        (self.deck_size().saturating_sub(1) / GRID_CELLS).min(MAX_PLAYERS)
    }

    /// Check the configuration is usable at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_size() == 0 {
            return Err(ConfigError::EmptyDistribution);
        }
        if self.initial_flips == 0 || usize::from(self.initial_flips) > GRID_CELLS {
            return Err(ConfigError::InvalidInitialFlips(self.initial_flips));
        }
        Ok(())
    }
}
