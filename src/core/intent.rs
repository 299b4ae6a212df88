//! Intents: everything a presentation layer can ask the engine to do.
//!
//! Intents name a move, not a player. The engine applies them on behalf of
//! whoever the current phase says is acting, so a hotseat UI never has to
//! track seats itself.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::grid::GridPos;

/// Which shared pile a card was drawn from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Deck,
    Discard,
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pile::Deck => f.write_str("deck"),
            Pile::Discard => f.write_str("discard"),
        }
    }
}

/// A request to advance the game.
///
/// ## Example
///
/// ```
/// use skyjo::core::Intent;
/// use skyjo::grid::GridPos;
///
/// let create = Intent::create_game(["Ada", "Grace"], 100);
/// let flip = Intent::FlipInitial(GridPos::new(0, 1));
/// assert_eq!(flip.name(), "flip initial cell");
/// assert_eq!(create.name(), "create game");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Seat 2 to 6 players and deal round 1. Blank names are dropped and the
    /// target score is clamped to 30..=500.
    CreateGame { names: Vec<String>, target_score: i32 },
    /// Turn up one of your cards during the initial reveal.
    FlipInitial(GridPos),
    DrawFromDeck,
    DrawFromDiscard,
    /// Swap the held card into your grid; the old card goes to the discard.
    ReplaceCell(GridPos),
    /// Throw the held card onto the discard pile.
    DiscardHeld,
    /// Turn up one of your cards after discarding.
    FlipAfterDiscard(GridPos),
    EndTurn,
    StartNextRound,
}

impl Intent {
    /// Convenience constructor for `CreateGame`.
    pub fn create_game<I, S>(names: I, target_score: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Intent::CreateGame {
            names: names.into_iter().map(Into::into).collect(),
            target_score,
        }
    }

    /// Human-readable name, used in rejection messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::CreateGame { .. } => "create game",
            Intent::FlipInitial(_) => "flip initial cell",
            Intent::DrawFromDeck => "draw from deck",
            Intent::DrawFromDiscard => "draw from discard",
            Intent::ReplaceCell(_) => "replace cell",
            Intent::DiscardHeld => "discard held card",
            Intent::FlipAfterDiscard(_) => "flip after discard",
            Intent::EndTurn => "end turn",
            Intent::StartNextRound => "start next round",
        }
    }

    /// Whether this intent turns up a card in a grid during a turn.
    #[must_use]
    pub fn is_reveal(&self) -> bool {
        matches!(self, Intent::ReplaceCell(_) | Intent::FlipAfterDiscard(_))
    }
}

/// An accepted intent, kept in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// Who acted. `None` for table-level intents (creating a game, dealing
    /// the next round).
    pub player: Option<PlayerId>,

    pub intent: Intent,

    /// Round the intent was applied in.
    pub round: u32,

    /// State version the intent produced.
    pub version: u64,
}
