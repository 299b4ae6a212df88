//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats are 0-based and follow turn order.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `im::Vector` so snapshots share structure.
//! Indexable by `PlayerId`.
//!
//! ## Player
//!
//! A seated player: name, current grid and accumulated score.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::grid::Grid;

/// Seat index of a player, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Whether this is the last seat in turn order.
    #[must_use]
    pub fn is_last(self, player_count: usize) -> bool {
        self.index() + 1 == player_count
    }

    /// Iterate over all player IDs for a table of `player_count` seats.
    ///
    /// ```
    /// use skyjo::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage.
///
/// Backed by an `im::Vector<T>` with one entry per seat, so cloning a
/// `PlayerMap` is O(1) and a mutation only copies the touched chunk.
///
/// ## Example
///
/// ```
/// use skyjo::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i32> = PlayerMap::new(3, |_| 0);
/// scores[PlayerId::new(1)] += 12;
///
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// assert_eq!(scores[PlayerId::new(1)], 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T: Clone> {
    data: Vector<T>,
}

impl<T: Clone> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// A map with no seats (a table before setup).
    #[must_use]
    pub fn empty() -> Self {
        Self { data: Vector::new() }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Whether no seats are taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to a player's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T: Clone> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T: Clone> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    /// Display name, already trimmed.
    pub name: String,

    /// This round's grid. Replaced at every deal.
    pub grid: Grid,

    /// Sum of all finished round scores.
    pub total_score: i32,

    /// Score of every finished round, oldest first.
    pub round_scores: Vector<i32>,
}

impl Player {
    /// Seat a player with an empty grid and no score.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            grid: Grid::default(),
            total_score: 0,
            round_scores: Vector::new(),
        }
    }

    /// Fold a finished round's score into the running total.
    pub fn record_round(&mut self, score: i32) {
        self.total_score += score;
        self.round_scores.push_back(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert!(PlayerId::new(2).is_last(3));
        assert!(!PlayerId::new(1).is_last(3));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.get(PlayerId::new(4)), None);
    }

    #[test]
    fn test_player_map_empty() {
        let map: PlayerMap<i32> = PlayerMap::empty();
        assert!(map.is_empty());
        assert_eq!(map.player_ids().count(), 0);
    }

    #[test]
    fn test_player_map_mutation_does_not_leak_into_clone() {
        let mut map: PlayerMap<i32> = PlayerMap::new(2, |_| 0);
        let snapshot = map.clone();

        map[PlayerId::new(0)] = 10;

        assert_eq!(map[PlayerId::new(0)], 10);
        assert_eq!(snapshot[PlayerId::new(0)], 0);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_record_round() {
        let mut player = Player::new(PlayerId::new(0), "Ada");
        player.record_round(12);
        player.record_round(-3);

        assert_eq!(player.total_score, 9);
        assert_eq!(player.round_scores.iter().copied().collect::<Vec<_>>(), vec![12, -3]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
