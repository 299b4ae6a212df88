//! The reducer: `(state, intent) -> state`.
//!
//! - `try_reduce`: apply an intent, or say why it was rejected
//! - `reduce`: apply an intent, returning the unchanged state on rejection
//! - `legal_intents`: every intent `reduce` would accept right now
//! - `result` / `standings`: who is winning
//!
//! Every call works on a private clone of the snapshot, so the caller's
//! state is never touched and a rejected intent leaves nothing behind.

use crate::core::error::{GameError, Result};
use crate::core::intent::{Intent, IntentRecord, Pile};
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Phase, TurnStep};

use super::{round, turn};

/// Result of a finished game. Lowest total wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied for the lowest total.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

pub(crate) fn wrong_phase(phase: &Phase, intent: &'static str) -> GameError {
    GameError::WrongPhase {
        intent,
        phase: phase.name(),
    }
}

/// Apply an intent to a snapshot.
///
/// Returns the next snapshot, with `version` bumped and the intent appended
/// to the history, or the reason the intent was rejected.
pub fn try_reduce(state: &GameState, intent: &Intent) -> Result<GameState> {
    let mut next = state.clone();
    let actor = state.current_player();

    match intent {
        Intent::CreateGame { names, target_score } => round::create_game(&mut next, names, *target_score)?,
        Intent::FlipInitial(pos) => turn::flip_initial(&mut next, *pos)?,
        Intent::DrawFromDeck => turn::draw(&mut next, Pile::Deck)?,
        Intent::DrawFromDiscard => turn::draw(&mut next, Pile::Discard)?,
        Intent::ReplaceCell(pos) => turn::replace(&mut next, *pos)?,
        Intent::DiscardHeld => turn::discard_held(&mut next)?,
        Intent::FlipAfterDiscard(pos) => turn::flip_after_discard(&mut next, *pos)?,
        Intent::EndTurn => turn::end_turn(&mut next)?,
        Intent::StartNextRound => round::start_next_round(&mut next)?,
    }

    next.version += 1;
    next.history.push_back(IntentRecord {
        player: actor,
        intent: intent.clone(),
        round: next.round_number,
        version: next.version,
    });
    log::trace!("v{}: {} -> {}", next.version, intent.name(), next.phase.name());

    Ok(next)
}

/// Apply an intent, or return the state unchanged if it is rejected.
///
/// Deal failures cannot happen through intents once a game was created with
/// a deck large enough for its players; should one surface anyway it is
/// logged as an error rather than dropped.
#[must_use]
pub fn reduce(state: &GameState, intent: &Intent) -> GameState {
    match try_reduce(state, intent) {
        Ok(next) => next,
        Err(err) if err.is_fatal() => {
            log::error!("{} failed: {}", intent.name(), err);
            state.clone()
        }
        Err(err) => {
            log::debug!("rejected {}: {}", intent.name(), err);
            state.clone()
        }
    }
}

/// Fold a sequence of intents over a snapshot with `reduce`.
#[must_use]
pub fn replay<'a>(state: &GameState, intents: impl IntoIterator<Item = &'a Intent>) -> GameState {
    intents
        .into_iter()
        .fold(state.clone(), |state, intent| reduce(&state, intent))
}

/// Every intent `reduce` would accept from this snapshot.
///
/// `CreateGame` is never listed: it needs names from the table.
#[must_use]
pub fn legal_intents(state: &GameState) -> Vec<Intent> {
    match state.phase {
        Phase::Setup | Phase::GameOver => Vec::new(),
        Phase::RoundEnd => vec![Intent::StartNextRound],
        Phase::InitialFlip { player, .. } => state.players[player]
            .grid
            .hidden_positions()
            .into_iter()
            .map(Intent::FlipInitial)
            .collect(),
        Phase::FlipAfterDiscard { player } => state.players[player]
            .grid
            .hidden_positions()
            .into_iter()
            .map(Intent::FlipAfterDiscard)
            .collect(),
        Phase::Turn { player, step } => match step {
            TurnStep::Draw => {
                let mut intents = Vec::with_capacity(2);
                if !state.deck.is_empty() {
                    intents.push(Intent::DrawFromDeck);
                }
                if !state.discard.is_empty() {
                    intents.push(Intent::DrawFromDiscard);
                }
                intents
            }
            TurnStep::Holding { .. } => {
                let mut intents: Vec<Intent> = state.players[player]
                    .grid
                    .open_positions()
                    .into_iter()
                    .map(Intent::ReplaceCell)
                    .collect();
                intents.push(Intent::DiscardHeld);
                intents
            }
            TurnStep::Done => vec![Intent::EndTurn],
        },
    }
}

/// Players ordered by ascending total score; ties keep seat order.
#[must_use]
pub fn standings(state: &GameState) -> Vec<(PlayerId, i32)> {
    let mut totals: Vec<(PlayerId, i32)> = state
        .players()
        .iter()
        .map(|(id, player)| (id, player.total_score))
        .collect();
    totals.sort_by_key(|&(_, total)| total);
    totals
}

/// The winner(s), once the game is over.
#[must_use]
pub fn result(state: &GameState) -> Option<GameResult> {
    if !state.is_game_over() {
        return None;
    }

    let standings = standings(state);
    let best = standings.first()?.1;
    let mut winners: Vec<PlayerId> = standings
        .iter()
        .take_while(|&&(_, total)| total == best)
        .map(|&(id, _)| id)
        .collect();

    if winners.len() == 1 {
        winners.pop().map(GameResult::Winner)
    } else {
        Some(GameResult::Winners(winners))
    }
}
