//! Result of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player holds every card outside the pot.
    Winner(PlayerId),
    /// Every player ran out of cards in the same tied round; the pot
    /// holds the whole deck.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if the game was not drawn.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}
