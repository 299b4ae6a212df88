//! Scheduling helpers for the presentation boundary.
//!
//! Nothing here is required to play: every scheduled transition has an
//! explicit intent that does the same thing synchronously.

pub mod auto_advance;

pub use auto_advance::{AutoAdvance, PendingAdvance, DEFAULT_DELAY};
