//! Game configuration.
//!
//! A `GameConfig` fixes everything about a new game that is not the
//! catalog: seat count, optional seed, and player names. Build one with
//! [`GameConfig::builder`]:
//!
//! ```
//! use top_trumps::core::GameConfig;
//!
//! let config = GameConfig::builder()
//!     .player_count(3)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.player_count(), 3);
//! assert_eq!(config.player_names(), ["Player 1", "Player 2", "Player 3"]);
//! ```

use std::ops::RangeInclusive;

use crate::core::PlayerId;
use crate::error::GameError;

/// Supported seat counts.
pub const PLAYER_COUNT_RANGE: RangeInclusive<usize> = 2..=4;

/// Validated configuration for a new game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    player_names: Vec<String>,
    seed: Option<u64>,
}

impl GameConfig {
    /// Start building a configuration. Defaults to two players, random seed.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    /// Configuration for `player_count` default-named players.
    pub fn for_players(player_count: usize) -> Result<Self, GameError> {
        Self::builder().player_count(player_count).build()
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Names in seat order.
    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    /// Fixed shuffle seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for [`GameConfig`].
#[derive(Clone, Debug)]
pub struct GameConfigBuilder {
    player_count: usize,
    player_names: Option<Vec<String>>,
    seed: Option<u64>,
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            player_names: None,
            seed: None,
        }
    }
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Fix the shuffle seed for a reproducible deal.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use custom names. Their count becomes the player count.
    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.player_count = names.len();
        self.player_names = Some(names);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<GameConfig, GameError> {
        if !PLAYER_COUNT_RANGE.contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }

        let player_names = self.player_names.unwrap_or_else(|| {
            PlayerId::all(self.player_count)
                .map(|p| p.to_string())
                .collect()
        });

        Ok(GameConfig {
            player_names,
            seed: self.seed,
        })
    }
}
