//! Game rules as a pure reducer.
//!
//! `reduce` takes the current snapshot and an intent and returns the next
//! snapshot. It never performs I/O, never blocks, and draws randomness only
//! from the RNG position stored in the snapshot, so the same state and
//! intent always produce the same result.
//!
//! - `engine`: the reducer entry points, legal intents, results
//! - `round`: seating, dealing, round-end scoring
//! - `turn`: initial reveal, draw / replace / discard / flip, end of turn

pub mod engine;
mod round;
mod turn;

pub use engine::{legal_intents, reduce, replay, result, standings, try_reduce, GameResult};
