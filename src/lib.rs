//! # skyjo
//!
//! The round/turn state machine of the card game Skyjo, for hotseat play.
//!
//! ## Design Principles
//!
//! 1. **Pure Reducer**: `reduce(&state, &intent)` returns the next snapshot.
//!    No I/O, no globals, no hidden randomness.
//!
//! 2. **Phases as Types**: `Phase` is a tagged enum; each variant carries only
//!    what is valid in it. There is no held card outside `Turn::Holding`.
//!
//! 3. **Rejection, not Failure**: invalid intents come back as the unchanged
//!    state (`reduce`) or a `GameError` saying why (`try_reduce`).
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: snapshots use `im` collections, so
//!   keeping every state a UI has rendered costs little.
//!
//! - **Deterministic Dealing**: the RNG position is part of the snapshot.
//!   Same seed and same intents give the same game.
//!
//! ## Modules
//!
//! - `core`: players, configuration, RNG, intents, state, errors
//! - `cards`: deck construction and dealing
//! - `grid`: cells, grids, column clears, scoring
//! - `rules`: the reducer and its round/turn transitions
//! - `schedule`: the optional deferred end-of-turn
//!
//! ## Example
//!
//! ```
//! use skyjo::{reduce, GameState, GridPos, Intent, Phase};
//!
//! let mut state = GameState::with_seed(7);
//! state = reduce(&state, &Intent::create_game(["Ada", "Grace"], 100));
//!
//! for pos in [GridPos::new(0, 0), GridPos::new(1, 0), GridPos::new(0, 0), GridPos::new(1, 0)] {
//!     state = reduce(&state, &Intent::FlipInitial(pos));
//! }
//! assert!(matches!(state.phase(), Phase::Turn { .. }));
//! ```

pub mod core;
pub mod cards;
pub mod grid;
pub mod rules;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{
    CardValue, ConfigError, DealError, GameConfig, GameError, GameRng, GameRngState, GameState, Intent,
    IntentRecord, Phase, Pile, Player, PlayerId, PlayerMap, TurnStep,
};

pub use crate::cards::{build_deck, deal_grid, deal_round, Deal};

pub use crate::grid::{Cell, Grid, GridPos};

pub use crate::rules::{legal_intents, reduce, replay, result, standings, try_reduce, GameResult};

pub use crate::schedule::{AutoAdvance, PendingAdvance};
