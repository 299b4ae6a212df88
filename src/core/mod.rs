//! Core engine types: players, configuration, RNG, intents, state, errors.
//!
//! Everything here is plain data. The transitions that move a `GameState`
//! forward live in `rules`.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod intent;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{
    clamp_target_score, CardValue, GameConfig, DEFAULT_INITIAL_FLIPS, DEFAULT_TARGET_SCORE, GRID_CELLS,
    GRID_COLS, GRID_ROWS, MAX_PLAYERS, MAX_TARGET_SCORE, MIN_PLAYERS, MIN_TARGET_SCORE,
};
pub use error::{ConfigError, DealError, GameError};
pub use intent::{Intent, IntentRecord, Pile};
pub use state::{GameState, Phase, TurnStep};
