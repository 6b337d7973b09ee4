//! The dealer: turns a catalog and a configuration into a fresh game.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::state::GameState;
use crate::cards::{load_cached, Card, Catalog};
use crate::core::{Deck, GameConfig, GameRng, Player, PlayerId, PlayerMap};
use crate::error::{CatalogError, GameError};

/// Deals games from a shared, immutable catalog.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use top_trumps::cards::{AttributeKey, Catalog};
/// use top_trumps::game::{Phase, TopTrumps};
///
/// let catalog = Catalog::from_json_str(r#"[
///     {"id": 1, "name": "Jesko",    "attributes": {"top_speed": 480}},
///     {"id": 2, "name": "Chiron",   "attributes": {"top_speed": 420}},
///     {"id": 3, "name": "Valkyrie", "attributes": {"top_speed": 350}},
///     {"id": 4, "name": "Nevera",   "attributes": {}}
/// ]"#).unwrap();
///
/// let engine = TopTrumps::new(Arc::new(catalog));
/// let mut game = engine.new_game_for(2).unwrap();
///
/// game.play_round(AttributeKey::TopSpeed).unwrap();
/// assert_eq!(game.phase(), Phase::Reveal);
/// assert_eq!(game.total_cards(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct TopTrumps {
    catalog: Arc<Catalog>,
}

impl TopTrumps {
    /// Create an engine over an injected catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Create an engine over the process-wide cached catalog, loading it
    /// from `path` on first use.
    pub fn from_cached(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Ok(Self::new(load_cached(path)?))
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Deal a new game with default player names and a random seed.
    pub fn new_game_for(&self, player_count: usize) -> Result<GameState, GameError> {
        self.new_game(&GameConfig::for_players(player_count)?)
    }

    /// Shuffle the catalog and deal it round-robin.
    ///
    /// Deck sizes differ by at most one and every catalog card is dealt.
    pub fn new_game(&self, config: &GameConfig) -> Result<GameState, GameError> {
        if self.catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        let mut rng = config.seed().map_or_else(GameRng::from_entropy, GameRng::new);
        let mut cards = self.catalog.cards().to_vec();
        rng.shuffle(&mut cards);

        let mut players =
            PlayerMap::new(config.player_count(), |p| Player::new(&config.player_names()[p.index()]));
        for (player, deck) in deal(cards, config.player_count()).into_iter().enumerate() {
            players[PlayerId::new(player as u8)].receive(deck);
        }

        info!(
            players = config.player_count(),
            cards = self.catalog.len(),
            seed = rng.seed(),
            "dealt new game"
        );

        Ok(GameState::from_deal(players, rng.seed()))
    }
}

/// Deal `cards` round-robin: card `i` goes to seat `i % player_count`,
/// each deck keeping the order cards arrived in.
pub fn deal(cards: impl IntoIterator<Item = Arc<Card>>, player_count: usize) -> Vec<Deck> {
    let mut decks = vec![Deck::new(); player_count];
    for (i, card) in cards.into_iter().enumerate() {
        decks[i % player_count].push_back(card);
    }
    decks
}
