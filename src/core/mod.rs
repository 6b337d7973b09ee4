//! Core building blocks: players, seeding, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, GameConfigBuilder, PLAYER_COUNT_RANGE};
pub use player::{Deck, Player, PlayerId, PlayerMap};
pub use rng::GameRng;
