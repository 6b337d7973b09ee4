//! Players, player identification, and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe 0-based player index. Players are never removed from a game,
//! so a `PlayerId` stays valid for the whole game even after elimination.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//!
//! ## Player
//!
//! A named seat holding an ordered deck. Index 0 of the deck is the top card.

use std::ops::{Index, IndexMut};
use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
/// Ordering follows the index, which is the order cards are collected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use top_trumps::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

/// Displays as the 1-based seat number, e.g. `PlayerId(0)` is "Player 1".
impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use top_trumps::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// assert_eq!(wins[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's deck. Front is the top card.
///
/// `im::Vector` gives O(1) pop-front/push-back and cheap snapshots of a
/// whole game state.
pub type Deck = Vector<Arc<Card>>;

/// A seat at the table.
///
/// An eliminated player (empty deck) stays in the player list so that
/// `PlayerId`s remain stable.
#[derive(Clone, Debug, Serialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    deck: Deck,
}

impl Player {
    /// Create a player with an empty deck.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deck: Deck::new(),
        }
    }

    /// The player's cards, top card first.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Number of cards held.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// A player is alive while they hold at least one card.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.deck.is_empty()
    }

    /// The card that will be played next, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<&Arc<Card>> {
        self.deck.front()
    }

    /// Remove and return the top card.
    pub(crate) fn pop_top(&mut self) -> Option<Arc<Card>> {
        self.deck.pop_front()
    }

    /// Append cards to the bottom of the deck, preserving their order.
    pub(crate) fn receive(&mut self, cards: impl IntoIterator<Item = Arc<Card>>) {
        self.deck.extend(cards);
    }
}
