//! Round-level transitions: seating players, dealing, folding scores in at
//! round end and deciding whether the game is over.

use im::Vector;

use crate::cards::deal_round;
use crate::core::config::{clamp_target_score, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::core::error::{GameError, Result};
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::core::state::{GameState, Phase};

use super::engine::wrong_phase;

pub(crate) fn create_game(state: &mut GameState, names: &[String], target_score: i32) -> Result<()> {
    if state.phase != Phase::Setup {
        return Err(wrong_phase(&state.phase, "create game"));
    }

    let names: Vec<&str> = names.iter().map(|name| name.trim()).filter(|name| !name.is_empty()).collect();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
        return Err(GameError::PlayerCount(names.len()));
    }

    let needed = GameConfig::cards_needed(names.len());
    let available = state.config.deck_size();
    if available < needed {
        return Err(GameError::DeckTooSmall {
            players: names.len(),
            needed,
            available,
        });
    }

    state.players = PlayerMap::new(names.len(), |id| Player::new(id, names[id.index()]));
    state.target_score = clamp_target_score(target_score);
    state.round_number = 0;

    log::info!(
        "new game: {} players, target score {}",
        state.player_count(),
        state.target_score
    );
    start_round(state)
}

pub(crate) fn start_next_round(state: &mut GameState) -> Result<()> {
    if state.phase != Phase::RoundEnd {
        return Err(wrong_phase(&state.phase, "start next round"));
    }
    start_round(state)
}

/// Deal a fresh round to the seated players.
///
/// Builds and shuffles a new deck, deals a face-down grid to each player in
/// turn order, turns up one card to start the discard pile, and hands the
/// initial reveal to player 0.
pub(crate) fn start_round(state: &mut GameState) -> Result<()> {
    let mut rng = state.rng();
    let deal = deal_round(&state.config, state.player_count(), &mut rng)?;
    state.store_rng(&rng);

    for ((_, player), grid) in state.players.iter_mut().zip(deal.grids) {
        player.grid = grid;
    }
    state.deck = deal.deck.into_iter().collect();
    state.discard = Vector::unit(deal.discard_top);
    state.closing = None;
    state.round_number += 1;
    state.phase = Phase::InitialFlip {
        player: PlayerId::new(0),
        flips_remaining: state.config.initial_flips,
    };

    log::info!(
        "round {} dealt: {} cards left in the deck, {} on the discard",
        state.round_number,
        state.deck.len(),
        deal.discard_top
    );
    Ok(())
}

/// Close the round: turn every card up, fold each grid's score into the
/// player's total, then go to `GameOver` if anyone reached the target.
pub(crate) fn finish_round(state: &mut GameState) {
    for (id, player) in state.players.iter_mut() {
        player.grid.reveal_all();
        let score = player.grid.round_score();
        player.record_round(score);
        log::info!("{} ({}) scores {} for a total of {}", id, player.name, score, player.total_score);
    }

    let target = state.target_score;
    let reached = state.players.iter().any(|(_, player)| player.total_score >= target);
    state.phase = if reached {
        log::info!("game over after round {}", state.round_number);
        Phase::GameOver
    } else {
        Phase::RoundEnd
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GRID_CELLS;
    use crate::grid::{Grid, GridPos};

    fn seated(names: &[&str]) -> GameState {
        let mut state = GameState::with_seed(42);
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        create_game(&mut state, &names, 100).unwrap();
        state
    }

    #[test]
    fn test_create_game_deals_round_one() {
        let state = seated(&["Ada", "Grace", "Linus"]);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.deck_size(), 150 - 3 * GRID_CELLS - 1);
        assert_eq!(state.discard_pile().len(), 1);
        assert_eq!(state.closing_player(), None);
        assert_eq!(
            state.phase,
            Phase::InitialFlip {
                player: PlayerId::new(0),
                flips_remaining: 2
            }
        );
        for (_, player) in state.players().iter() {
            assert_eq!(player.grid.hidden_count(), GRID_CELLS);
            assert_eq!(player.total_score, 0);
        }
    }

    #[test]
    fn test_create_game_trims_and_drops_blank_names() {
        let state = seated(&["  Ada ", "", "   ", "Grace"]);

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.players()[PlayerId::new(0)].name, "Ada");
        assert_eq!(state.players()[PlayerId::new(1)].name, "Grace");
    }

    #[test]
    fn test_create_game_player_count_limits() {
        let mut state = GameState::with_seed(1);
        let one = vec!["Solo".to_string()];
        assert_eq!(create_game(&mut state, &one, 100), Err(GameError::PlayerCount(1)));

        let seven: Vec<String> = (0..7).map(|i| format!("P{}", i)).collect();
        assert_eq!(create_game(&mut state, &seven, 100), Err(GameError::PlayerCount(7)));

        let six: Vec<String> = (0..6).map(|i| format!("P{}", i)).collect();
        assert!(create_game(&mut state, &six, 100).is_ok());
    }

    #[test]
    fn test_create_game_clamps_target() {
        let mut low = GameState::with_seed(1);
        create_game(&mut low, &["A".into(), "B".into()], 5).unwrap();
        assert_eq!(low.target_score(), 30);

        let mut high = GameState::with_seed(1);
        create_game(&mut high, &["A".into(), "B".into()], 10_000).unwrap();
        assert_eq!(high.target_score(), 500);
    }

    #[test]
    fn test_create_game_rejects_small_deck() {
        let mut state = GameState::new(GameConfig::new([(1, 30)]), 1).unwrap();
        let names: Vec<String> = vec!["A".into(), "B".into(), "C".into()];
        assert_eq!(
            create_game(&mut state, &names, 100),
            Err(GameError::DeckTooSmall {
                players: 3,
                needed: 37,
                available: 30
            })
        );
    }

    #[test]
    fn test_create_game_only_in_setup() {
        let mut state = seated(&["Ada", "Grace"]);
        let names = vec!["X".to_string(), "Y".to_string()];
        assert!(matches!(
            create_game(&mut state, &names, 100),
            Err(GameError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_round_end_scores_face_down_cards() {
        let mut state = seated(&["Ada", "Grace"]);
        state.players[PlayerId::new(0)].grid = Grid::from_rows([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 0]]);
        let mut cleared = Grid::from_rows([[5, 1, 1, 1], [5, 1, 1, 1], [5, 1, 1, 1]]);
        for row in 0..3 {
            cleared.flip(GridPos::new(row, 0)).unwrap();
        }
        cleared.clear_columns();
        state.players[PlayerId::new(1)].grid = cleared;

        finish_round(&mut state);

        assert_eq!(state.players[PlayerId::new(0)].total_score, 66);
        assert_eq!(state.players[PlayerId::new(1)].total_score, 9);
        assert_eq!(state.phase, Phase::RoundEnd);
        assert!(state.players[PlayerId::new(0)].grid.is_fully_revealed());
    }

    #[test]
    fn test_reaching_target_exactly_ends_game() {
        let mut state = seated(&["Ada", "Grace"]);
        state.players[PlayerId::new(0)].total_score = 34;
        state.players[PlayerId::new(0)].grid = Grid::from_rows([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 0]]);
        state.players[PlayerId::new(1)].grid = Grid::from_rows([[0; 4]; 3]);

        finish_round(&mut state);

        assert_eq!(state.players[PlayerId::new(0)].total_score, 100);
        assert_eq!(state.players[PlayerId::new(1)].total_score, 0);
        assert_eq!(state.phase, Phase::GameOver);
    }

    #[test]
    fn test_start_next_round_keeps_scores() {
        let mut state = seated(&["Ada", "Grace"]);
        finish_round(&mut state);
        assert_eq!(state.phase, Phase::RoundEnd);
        let totals: Vec<i32> = state.players().iter().map(|(_, p)| p.total_score).collect();
        let first_deck: Vec<_> = state.deck.iter().copied().collect();

        start_next_round(&mut state).unwrap();

        assert_eq!(state.round_number(), 2);
        assert_eq!(state.closing_player(), None);
        assert_eq!(state.flips_remaining(), Some(2));
        let after: Vec<i32> = state.players().iter().map(|(_, p)| p.total_score).collect();
        assert_eq!(totals, after);
        assert_eq!(state.players()[PlayerId::new(0)].round_scores.len(), 1);
        assert_ne!(state.deck.iter().copied().collect::<Vec<_>>(), first_deck);
    }

    #[test]
    fn test_start_next_round_only_from_round_end() {
        let mut state = seated(&["Ada", "Grace"]);
        assert!(matches!(start_next_round(&mut state), Err(GameError::WrongPhase { .. })));
    }
}
