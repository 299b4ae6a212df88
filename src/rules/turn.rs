//! Per-turn transitions: the initial reveal, drawing, replacing, discarding,
//! the post-discard flip and ending a turn.
//!
//! Every function mutates a private copy handed in by the reducer and
//! returns an error before touching anything it would have to undo.

use crate::core::config::CardValue;
use crate::core::error::{GameError, Result};
use crate::core::intent::Pile;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Phase, TurnStep};
use crate::grid::GridPos;

use super::engine::wrong_phase;
use super::round;

pub(crate) fn flip_initial(state: &mut GameState, pos: GridPos) -> Result<()> {
    let Phase::InitialFlip {
        player,
        flips_remaining,
    } = state.phase
    else {
        return Err(wrong_phase(&state.phase, "flip initial cell"));
    };

    state.players[player].grid.flip(pos)?;

    let remaining = flips_remaining.saturating_sub(1);
    state.phase = if remaining > 0 {
        Phase::InitialFlip {
            player,
            flips_remaining: remaining,
        }
    } else if player.is_last(state.player_count()) {
        Phase::Turn {
            player: PlayerId::new(0),
            step: TurnStep::Draw,
        }
    } else {
        Phase::InitialFlip {
            player: player.next(state.player_count()),
            flips_remaining: state.config.initial_flips,
        }
    };
    Ok(())
}

pub(crate) fn draw(state: &mut GameState, source: Pile) -> Result<()> {
    let intent = match source {
        Pile::Deck => "draw from deck",
        Pile::Discard => "draw from discard",
    };
    let Phase::Turn { player, step } = state.phase else {
        return Err(wrong_phase(&state.phase, intent));
    };
    match step {
        TurnStep::Draw => {}
        TurnStep::Holding { .. } => return Err(GameError::CardAlreadyHeld),
        TurnStep::Done => return Err(GameError::TurnAlreadyPlayed),
    }

    let pile = match source {
        Pile::Deck => &mut state.deck,
        Pile::Discard => &mut state.discard,
    };
    let card = pile.pop_back().ok_or(GameError::EmptyPile(source))?;

    state.phase = Phase::Turn {
        player,
        step: TurnStep::Holding { card, source },
    };
    Ok(())
}

/// The acting player and the card they hold, or why there is none.
fn holding(state: &GameState, intent: &'static str) -> Result<(PlayerId, CardValue)> {
    match state.phase {
        Phase::Turn {
            player,
            step: TurnStep::Holding { card, .. },
        } => Ok((player, card)),
        Phase::Turn { .. } => Err(GameError::NoCardHeld),
        ref phase => Err(wrong_phase(phase, intent)),
    }
}

pub(crate) fn replace(state: &mut GameState, pos: GridPos) -> Result<()> {
    let (player, card) = holding(state, "replace cell")?;

    let old = state.players[player].grid.replace(pos, card)?;
    state.discard.push_back(old);
    after_reveal(state, player);

    state.phase = Phase::Turn {
        player,
        step: TurnStep::Done,
    };
    Ok(())
}

pub(crate) fn discard_held(state: &mut GameState) -> Result<()> {
    let (player, card) = holding(state, "discard held card")?;

    state.discard.push_back(card);

    // Nothing left to turn up: the discard alone completes the turn.
    state.phase = if state.players[player].grid.is_fully_revealed() {
        Phase::Turn {
            player,
            step: TurnStep::Done,
        }
    } else {
        Phase::FlipAfterDiscard { player }
    };
    Ok(())
}

pub(crate) fn flip_after_discard(state: &mut GameState, pos: GridPos) -> Result<()> {
    let Phase::FlipAfterDiscard { player } = state.phase else {
        return Err(wrong_phase(&state.phase, "flip after discard"));
    };

    state.players[player].grid.flip(pos)?;
    after_reveal(state, player);

    state.phase = Phase::Turn {
        player,
        step: TurnStep::Done,
    };
    Ok(())
}

pub(crate) fn end_turn(state: &mut GameState) -> Result<()> {
    let Phase::Turn { player, step } = state.phase else {
        return Err(wrong_phase(&state.phase, "end turn"));
    };
    if step != TurnStep::Done {
        return Err(GameError::TurnNotFinished);
    }

    let next = player.next(state.player_count());
    if state.closing == Some(next) {
        round::finish_round(state);
    } else {
        state.phase = Phase::Turn {
            player: next,
            step: TurnStep::Draw,
        };
    }
    Ok(())
}

/// Column clears, then closing detection, after a card was turned up by a
/// turn action.
fn after_reveal(state: &mut GameState, player: PlayerId) {
    let grid = &mut state.players[player].grid;

    let cleared = grid.clear_columns();
    if !cleared.is_empty() {
        log::debug!("{} cleared columns {:?}", player, cleared.as_slice());
    }

    if state.closing.is_none() && grid.is_fully_revealed() {
        log::info!("{} revealed every card; final lap of round {}", player, state.round_number);
        state.closing = Some(player);
    }
}
