//! Deck construction and dealing.
//!
//! A round's deck is built fresh from the configured distribution and
//! shuffled. The top of the deck is the end of the sequence: dealing and
//! drawing pop from the back.

use std::collections::BTreeMap;

use crate::core::config::{CardValue, GameConfig, GRID_CELLS};
use crate::core::error::DealError;
use crate::core::rng::GameRng;
use crate::grid::Grid;

/// Result of dealing one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    /// One face-down grid per player, in turn order.
    pub grids: Vec<Grid>,
    /// Undealt cards; top is the last element.
    pub deck: Vec<CardValue>,
    /// The card turned face-up to start the discard pile.
    pub discard_top: CardValue,
}

/// Expand a distribution into a shuffled deck.
///
/// Fails only when the distribution holds no cards.
pub fn build_deck(
    distribution: &BTreeMap<CardValue, usize>,
    rng: &mut GameRng,
) -> Result<Vec<CardValue>, DealError> {
    let mut deck: Vec<CardValue> = distribution
        .iter()
        .flat_map(|(&value, &count)| std::iter::repeat(value).take(count))
        .collect();

    if deck.is_empty() {
        return Err(DealError::EmptyDistribution);
    }

    rng.shuffle(&mut deck);
    Ok(deck)
}

/// Pop twelve cards off the top of the deck into a face-down grid.
///
/// The first card popped lands at (0, 0), continuing row-major. On failure
/// the deck is left untouched.
pub fn deal_grid(deck: &mut Vec<CardValue>) -> Result<Grid, DealError> {
    if deck.len() < GRID_CELLS {
        return Err(DealError::DeckExhausted {
            needed: GRID_CELLS,
            available: deck.len(),
        });
    }

    let mut values = [0; GRID_CELLS];
    for slot in values.iter_mut() {
        // Length checked above.
        *slot = deck.pop().unwrap_or_default();
    }
    Ok(Grid::from_values(values))
}

/// Build, shuffle and deal a full round.
///
/// Needs `12 × player_count + 1` cards; anything less is a configuration
/// error and is reported before a single card is dealt.
pub fn deal_round(
    config: &GameConfig,
    player_count: usize,
    rng: &mut GameRng,
) -> Result<Deal, DealError> {
    let mut deck = build_deck(&config.distribution, rng)?;

    let needed = GameConfig::cards_needed(player_count);
    if deck.len() < needed {
        return Err(DealError::DeckExhausted {
            needed,
            available: deck.len(),
        });
    }

    let grids = (0..player_count)
        .map(|_| deal_grid(&mut deck))
        .collect::<Result<Vec<_>, _>>()?;

    let discard_top = deck.pop().ok_or(DealError::DeckExhausted {
        needed,
        available: needed - 1,
    })?;

    Ok(Deal {
        grids,
        deck,
        discard_top,
    })
}
