//! # top-trumps
//!
//! Round-resolution engine for attribute-comparison card games.
//!
//! Players hold decks of cards with numeric attributes. Each round the
//! active player picks an attribute, every player with cards reveals their
//! top card, and the best value takes all revealed cards plus any pot left
//! by earlier ties. The game ends when one player holds every card.
//!
//! ## Flow
//!
//! ```
//! use std::sync::Arc;
//! use top_trumps::cards::{AttributeKey, Catalog};
//! use top_trumps::core::GameConfig;
//! use top_trumps::game::{Phase, TopTrumps};
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"id": 1, "name": "Jesko",  "attributes": {"horsepower": 1600, "weight": 1420}},
//!     {"id": 2, "name": "Chiron", "attributes": {"horsepower": 1500, "weight": 1995}},
//!     {"id": 3, "name": "Senna",  "attributes": {"horsepower": 800}}
//! ]"#).unwrap();
//!
//! let engine = TopTrumps::new(Arc::new(catalog));
//! let config = GameConfig::builder().player_count(2).seed(42).build().unwrap();
//! let mut game = engine.new_game(&config).unwrap();
//!
//! while game.phase() != Phase::GameOver {
//!     game.play_round(AttributeKey::Horsepower).unwrap();
//!     game.advance_round().unwrap();
//! }
//! assert!(game.result().is_some());
//! ```
//!
//! ## Modules
//!
//! - `cards`: attribute keys and rules, cards, the catalog loader
//! - `core`: player ids, players and decks, RNG, configuration
//! - `rules`: attribute comparison and game results
//! - `game`: dealing, game state, and the turn operations
//! - `error`: catalog and game errors
//!
//! ## Logging
//!
//! The engine emits `tracing` events (new game, each resolved round, game
//! over); install any subscriber to see them.

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{AttributeKey, Attributes, Card, CardId, Catalog, Rule};
pub use crate::core::{GameConfig, GameRng, Player, PlayerId, PlayerMap};
pub use crate::error::{CatalogError, GameError};
pub use crate::game::{GameState, Phase, RoundOutcome, Standing, TopTrumps};
pub use crate::rules::{compare_cards, GameResult};
