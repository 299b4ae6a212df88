//! Game state: the single snapshot the reducer threads through.
//!
//! ## Phase
//!
//! A tagged variant per phase, carrying only the fields valid in that phase.
//! The held card exists only inside `Turn { step: Holding { .. } }`, and the
//! flip counter only inside `InitialFlip`.
//!
//! ## GameState
//!
//! Complete table state:
//! - Phase and round bookkeeping (round number, closing player, version)
//! - Players with their grids and scores
//! - Deck and discard pile (top = back of the vector)
//! - RNG position, so dealing stays a pure function of the snapshot
//! - History of accepted intents
//!
//! Uses `im` persistent collections so every transition can produce a new
//! snapshot without copying the whole table.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::{CardValue, GameConfig, DEFAULT_TARGET_SCORE};
use super::error::ConfigError;
use super::intent::{IntentRecord, Pile};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::{GameRng, GameRngState};

/// Where the acting player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStep {
    /// Nothing drawn yet.
    Draw,
    /// A card is in flight and must be placed or discarded.
    Holding { card: CardValue, source: Pile },
    /// The reveal-producing action is done; only ending the turn remains.
    Done,
}

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for players to be seated.
    Setup,
    /// `player` is turning up their starting cards.
    InitialFlip { player: PlayerId, flips_remaining: u8 },
    /// `player` is taking a regular turn.
    Turn { player: PlayerId, step: TurnStep },
    /// `player` discarded the drawn card and must turn up a face-down card.
    FlipAfterDiscard { player: PlayerId },
    /// Scores folded in; waiting for the next deal.
    RoundEnd,
    /// Someone reached the target score.
    GameOver,
}

impl Phase {
    /// Human-readable name, used in rejection messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::InitialFlip { .. } => "initial reveal",
            Phase::Turn { .. } => "turn",
            Phase::FlipAfterDiscard { .. } => "flip after discard",
            Phase::RoundEnd => "round end",
            Phase::GameOver => "game over",
        }
    }

    /// The player expected to act, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match *self {
            Phase::InitialFlip { player, .. }
            | Phase::Turn { player, .. }
            | Phase::FlipAfterDiscard { player } => Some(player),
            Phase::Setup | Phase::RoundEnd | Phase::GameOver => None,
        }
    }

    /// The card in flight, if any.
    #[must_use]
    pub fn held_card(&self) -> Option<CardValue> {
        match *self {
            Phase::Turn {
                step: TurnStep::Holding { card, .. },
                ..
            } => Some(card),
            _ => None,
        }
    }
}

/// Complete game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) phase: Phase,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) deck: Vector<CardValue>,
    pub(crate) discard: Vector<CardValue>,
    /// First player this round to have no face-down cards left.
    pub(crate) closing: Option<PlayerId>,
    pub(crate) target_score: i32,
    /// 0 until the first deal.
    pub(crate) round_number: u32,
    pub(crate) version: u64,
    pub(crate) rng: GameRngState,
    pub(crate) history: Vector<IntentRecord>,
}

impl GameState {
    /// Create an empty table in `Setup`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::unchecked(config, seed))
    }

    /// Create an empty table with the standard deck.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::unchecked(GameConfig::standard(), seed)
    }

    fn unchecked(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            phase: Phase::Setup,
            players: PlayerMap::empty(),
            deck: Vector::new(),
            discard: Vector::new(),
            closing: None,
            target_score: DEFAULT_TARGET_SCORE,
            round_number: 0,
            version: 0,
            rng: GameRngState::seeded(seed),
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    // === Players ===

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player expected to act, if any.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.phase.current_player()
    }

    /// Player whose full reveal triggered the final lap, if any.
    #[must_use]
    pub fn closing_player(&self) -> Option<PlayerId> {
        self.closing
    }

    // === Piles ===

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard_top(&self) -> Option<CardValue> {
        self.discard.back().copied()
    }

    /// Discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<CardValue> {
        &self.discard
    }

    #[must_use]
    pub fn held_card(&self) -> Option<CardValue> {
        self.phase.held_card()
    }

    // === Initial reveal ===

    /// Flips left for the player in the initial reveal.
    #[must_use]
    pub fn flips_remaining(&self) -> Option<u8> {
        match self.phase {
            Phase::InitialFlip { flips_remaining, .. } => Some(flips_remaining),
            _ => None,
        }
    }

    // === Progress ===

    #[must_use]
    pub fn target_score(&self) -> i32 {
        self.target_score
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Bumped by every accepted intent.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    // === Card accounting ===

    /// Every card on the table: deck, discard, every grid cell (removed ones
    /// included) and the held card.
    #[must_use]
    pub fn cards_in_play(&self) -> Vec<CardValue> {
        let mut cards: Vec<CardValue> = self.deck.iter().chain(self.discard.iter()).copied().collect();
        for (_, player) in self.players.iter() {
            cards.extend(player.grid.values());
        }
        cards.extend(self.held_card());
        cards
    }

    /// `cards_in_play` as a multiset.
    #[must_use]
    pub fn card_counts(&self) -> FxHashMap<CardValue, usize> {
        let mut counts = FxHashMap::default();
        for card in self.cards_in_play() {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    // === Internal ===

    pub(crate) fn rng(&self) -> GameRng {
        GameRng::from_state(&self.rng)
    }

    pub(crate) fn store_rng(&mut self, rng: &GameRng) {
        self.rng = rng.state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_setup() {
        let state = GameState::with_seed(42);

        assert_eq!(state.phase(), &Phase::Setup);
        assert_eq!(state.player_count(), 0);
        assert_eq!(state.round_number(), 0);
        assert_eq!(state.version(), 0);
        assert_eq!(state.target_score(), DEFAULT_TARGET_SCORE);
        assert_eq!(state.current_player(), None);
        assert_eq!(state.discard_top(), None);
        assert!(state.cards_in_play().is_empty());
    }

    #[test]
    fn test_new_validates_config() {
        assert_eq!(
            GameState::new(GameConfig::new(Vec::new()), 1),
            Err(ConfigError::EmptyDistribution)
        );
        assert!(GameState::new(GameConfig::standard(), 1).is_ok());
    }

    #[test]
    fn test_phase_accessors() {
        let holding = Phase::Turn {
            player: PlayerId::new(1),
            step: TurnStep::Holding {
                card: 9,
                source: Pile::Deck,
            },
        };
        assert_eq!(holding.current_player(), Some(PlayerId::new(1)));
        assert_eq!(holding.held_card(), Some(9));
        assert_eq!(holding.name(), "turn");

        let flip = Phase::FlipAfterDiscard {
            player: PlayerId::new(0),
        };
        assert_eq!(flip.held_card(), None);
        assert_eq!(flip.current_player(), Some(PlayerId::new(0)));
        assert_eq!(Phase::RoundEnd.current_player(), None);
    }

    #[test]
    fn test_rng_round_trip() {
        let mut state = GameState::with_seed(3);
        let mut rng = state.rng();
        let first = rng.gen_index(100);
        state.store_rng(&rng);

        let mut fresh = GameRng::new(3);
        assert_eq!(fresh.gen_index(100), first);
        assert_eq!(state.rng().state(), fresh.state());
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::with_seed(42);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
