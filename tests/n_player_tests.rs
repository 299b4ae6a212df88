//! Player-count coverage.
//!
//! These tests verify that seating, turn order and dealing have no hidden
//! two-player assumptions across the supported 2 to 6 players.

use skyjo::core::{GameConfig, GameError, GameState, Intent, Phase, PlayerId, TurnStep};
use skyjo::rules::{legal_intents, reduce, result, try_reduce};

fn names(player_count: usize) -> Vec<String> {
    (0..player_count).map(|i| format!("Player {}", i + 1)).collect()
}

fn new_game(player_count: usize, seed: u64) -> GameState {
    reduce(&GameState::with_seed(seed), &Intent::create_game(names(player_count), 100))
}

/// First legal intent, except that a held card always goes onto a
/// face-down cell so every turn reveals something.
fn first_legal(state: &GameState) -> Option<Intent> {
    if let Phase::Turn {
        player,
        step: TurnStep::Holding { .. },
    } = *state.phase()
    {
        return Some(match state.players()[player].grid.hidden_positions().first() {
            Some(&pos) => Intent::ReplaceCell(pos),
            None => Intent::DiscardHeld,
        });
    }
    legal_intents(state).into_iter().next()
}

/// Test that every supported player count deals a full table.
#[test]
fn test_deal_for_each_player_count() {
    for player_count in 2..=6 {
        let state = new_game(player_count, 42);
        assert_eq!(state.player_count(), player_count);
        assert_eq!(state.deck_size(), 150 - 12 * player_count - 1);
        assert_eq!(state.discard_pile().len(), 1);

        for (id, player) in state.players().iter() {
            assert_eq!(player.id, id);
            assert_eq!(player.name, format!("Player {}", id.index() + 1));
            assert_eq!(player.grid.hidden_count(), 12);
            assert_eq!(player.total_score, 0);
        }
    }
}

/// Test that counts outside 2..=6 are rejected without leaving setup.
#[test]
fn test_player_count_limits() {
    let setup = GameState::with_seed(1);
    for player_count in [0, 1, 7, 8] {
        let err = try_reduce(&setup, &Intent::create_game(names(player_count), 100)).unwrap_err();
        assert_eq!(err, GameError::PlayerCount(player_count));
        assert_eq!(reduce(&setup, &Intent::create_game(names(player_count), 100)), setup);
    }
}

/// Blank names do not take a seat.
#[test]
fn test_blank_names_are_dropped() {
    let setup = GameState::with_seed(1);
    let state = reduce(&setup, &Intent::create_game(["Ada", "  ", "", "Grace"], 100));
    assert_eq!(state.player_count(), 2);
    assert_eq!(state.players()[PlayerId::new(1)].name, "Grace");

    let err = try_reduce(&setup, &Intent::create_game(["Ada", " "], 100)).unwrap_err();
    assert_eq!(err, GameError::PlayerCount(1));
}

/// A small custom deck limits how many players can sit down.
#[test]
fn test_small_deck_limits_players() {
    let config = GameConfig::new([(0, 30)]);
    assert_eq!(config.max_players(), 2);

    let setup = GameState::new(config, 5).unwrap();
    let err = try_reduce(&setup, &Intent::create_game(names(3), 100)).unwrap_err();
    assert_eq!(
        err,
        GameError::DeckTooSmall {
            players: 3,
            needed: 37,
            available: 30
        }
    );
    assert!(try_reduce(&setup, &Intent::create_game(names(2), 100)).is_ok());
}

/// Initial reveal walks every seat in order before player 1 draws.
#[test]
fn test_initial_reveal_visits_every_player() {
    for player_count in 2..=6 {
        let mut state = new_game(player_count, 7);
        let mut order = Vec::new();

        while let Phase::InitialFlip { player, .. } = *state.phase() {
            order.push(player);
            state = reduce(&state, &first_legal(&state).unwrap());
        }

        let expected: Vec<PlayerId> = PlayerId::all(player_count).flat_map(|p| [p, p]).collect();
        assert_eq!(order, expected);
        assert_eq!(
            state.phase(),
            &Phase::Turn {
                player: PlayerId::new(0),
                step: TurnStep::Draw
            }
        );
    }
}

/// Test that turns rotate through every seat and wrap around.
#[test]
fn test_turn_order_wraps() {
    let player_count = 5;
    let mut state = new_game(player_count, 3);
    let mut turns = Vec::new();

    while turns.len() < 2 * player_count {
        if let Phase::Turn {
            player,
            step: TurnStep::Draw,
        } = *state.phase()
        {
            turns.push(player.index());
        }
        state = reduce(&state, &first_legal(&state).unwrap());
    }

    assert_eq!(turns, vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
}

/// Test that a full game finishes at every player count.
#[test]
fn test_full_game_for_each_player_count() {
    for player_count in 2..=6 {
        let mut state = new_game(player_count, 100 + player_count as u64);
        let mut steps = 0;

        while let Some(intent) = first_legal(&state) {
            state = try_reduce(&state, &intent).expect("legal intent");
            steps += 1;
            assert!(steps < 50_000, "game with {player_count} players did not finish");
        }

        assert!(state.is_game_over());
        let winners = result(&state).expect("finished game has a result");
        let lowest = state.players().iter().map(|(_, p)| p.total_score).min().unwrap();
        for (id, player) in state.players().iter() {
            assert_eq!(winners.is_winner(id), player.total_score == lowest);
            assert_eq!(player.round_scores.len() as u32, state.round_number());
        }
    }
}
