//! Error types.
//!
//! - `GameError`: why an intent was rejected. Rejections leave the state
//!   untouched; only `GameError::Deal` is fatal.
//! - `DealError`: building or dealing a round's deck failed.
//! - `ConfigError`: the table configuration is unusable.

use thiserror::Error;

use super::intent::Pile;
use crate::grid::GridPos;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("card distribution is empty")]
    EmptyDistribution,
    #[error("initial flips must be between 1 and 12, got {0}")]
    InvalidInitialFlips(u8),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DealError {
    #[error("card distribution is empty")]
    EmptyDistribution,
    #[error("deck exhausted while dealing: needed {needed} cards, had {available}")]
    DeckExhausted { needed: usize, available: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{intent} is not accepted during {phase}")]
    WrongPhase {
        intent: &'static str,
        phase: &'static str,
    },
    #[error("cell {0} is outside the grid")]
    OutOfBounds(GridPos),
    #[error("cell {0} is already revealed or removed")]
    CellUnavailable(GridPos),
    #[error("cell {0} was removed by a column clear")]
    CellRemoved(GridPos),
    #[error("the {0} pile is empty")]
    EmptyPile(Pile),
    #[error("a card is already held")]
    CardAlreadyHeld,
    #[error("no card is held")]
    NoCardHeld,
    #[error("this turn's draw has already been played")]
    TurnAlreadyPlayed,
    #[error("the turn is not finished yet")]
    TurnNotFinished,
    #[error("need 2 to 6 named players, got {0}")]
    PlayerCount(usize),
    #[error("deck of {available} cards cannot deal {players} players ({needed} needed)")]
    DeckTooSmall {
        players: usize,
        needed: usize,
        available: usize,
    },
    #[error(transparent)]
    Deal(#[from] DealError),
}

impl GameError {
    /// Whether this error signals a broken precondition rather than a
    /// rejected intent.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::Deal(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
