//! Deferred end-of-turn.
//!
//! A hotseat UI usually passes the device on shortly after a card is turned
//! up instead of waiting for an "end turn" click. `AutoAdvance` models that
//! as an explicit task:
//!
//! - `observe` schedules it when the acting player's turn is complete
//! - `poll` fires `EndTurn` through the reducer once the delay has passed
//! - `cancel` drops it
//!
//! The task remembers the state `version` it was scheduled for. If the state
//! moved on first (an explicit `EndTurn`, or anything else), the task is
//! stale and is discarded instead of firing. The engine never depends on it.
//!
//! ```
//! use skyjo::core::{GameState, Intent};
//! use skyjo::grid::GridPos;
//! use skyjo::rules::reduce;
//! use skyjo::schedule::AutoAdvance;
//! use web_time::{Duration, Instant};
//!
//! let mut state = reduce(&GameState::with_seed(1), &Intent::create_game(["Ada", "Grace"], 100));
//! for pos in [(0, 0), (0, 1), (0, 0), (0, 1)] {
//!     state = reduce(&state, &Intent::FlipInitial(GridPos::new(pos.0, pos.1)));
//! }
//! state = reduce(&state, &Intent::DrawFromDeck);
//! state = reduce(&state, &Intent::ReplaceCell(GridPos::new(2, 2)));
//!
//! let start = Instant::now();
//! let mut advance = AutoAdvance::new(Duration::from_millis(800));
//! advance.observe(&state, start);
//! assert!(advance.poll(&state, start).is_none());
//!
//! let next = advance.poll(&state, start + Duration::from_secs(1)).unwrap();
//! assert_eq!(next.current_player().map(|p| p.index()), Some(1));
//! ```

use web_time::{Duration, Instant};

use crate::core::intent::Intent;
use crate::core::state::{GameState, Phase, TurnStep};
use crate::rules::reduce;

/// Delay used by `AutoAdvance::default`.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1200);

/// A scheduled `EndTurn` for one specific state version.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAdvance {
    pub version: u64,
    pub due: Instant,
}

/// Cancellable deferred end-of-turn.
#[derive(Clone, Debug)]
pub struct AutoAdvance {
    delay: Duration,
    pending: Option<PendingAdvance>,
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl AutoAdvance {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingAdvance> {
        self.pending
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending advance is due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_duration_since(now))
    }

    /// Look at a freshly rendered state.
    ///
    /// Schedules an advance when the turn is complete and none is pending
    /// for this version; drops a pending advance the state has outgrown.
    pub fn observe(&mut self, state: &GameState, now: Instant) {
        if !turn_complete(state) {
            self.cancel();
            return;
        }
        match self.pending {
            Some(pending) if pending.version == state.version() => {}
            _ => {
                log::trace!("auto-advance scheduled for v{}", state.version());
                self.pending = Some(PendingAdvance {
                    version: state.version(),
                    due: now + self.delay,
                });
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::trace!("auto-advance for v{} cancelled", pending.version);
        }
    }

    /// Fire the pending advance if it is due and still matches `state`.
    ///
    /// Returns the next state when it fired. A pending advance for an older
    /// version is dropped without firing.
    pub fn poll(&mut self, state: &GameState, now: Instant) -> Option<GameState> {
        let pending = self.pending?;
        if pending.version != state.version() || !turn_complete(state) {
            self.cancel();
            return None;
        }
        if now < pending.due {
            return None;
        }
        self.pending = None;
        Some(reduce(state, &Intent::EndTurn))
    }
}

fn turn_complete(state: &GameState) -> bool {
    matches!(
        state.phase(),
        Phase::Turn {
            step: TurnStep::Done,
            ..
        }
    )
}
