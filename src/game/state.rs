//! Game state for one session.
//!
//! `GameState` owns every player, the tie pot, and the cards revealed in
//! the current round. It is created by the dealer (`TopTrumps::new_game`)
//! and changed only by `play_round` and `advance_round`; everything else
//! here is a read accessor for whoever renders the game.
//!
//! ## Phases
//!
//! ```text
//! Choose --play_round--> Reveal --advance_round--> Choose
//!                                              \-> GameOver
//! ```
//!
//! Deck transfers happen inside `play_round`. `Reveal` only exposes the
//! decided outcome, so deck counts read during `Reveal` are already final.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use smallvec::SmallVec;
use tracing::{info, trace};

use crate::cards::{AttributeKey, Card};
use crate::core::{Deck, Player, PlayerId, PlayerMap};
use crate::error::GameError;
use crate::rules::GameResult;

/// Indexes of players that still hold cards, ascending.
pub type AlivePlayers = SmallVec<[PlayerId; 4]>;

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Active player picks an attribute.
    Choose,
    /// Round resolved; revealed cards and outcome are on display.
    Reveal,
    /// At most one player holds cards.
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Choose => "choose",
            Phase::Reveal => "reveal",
            Phase::GameOver => "game over",
        })
    }
}

/// What happened in the last played round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    /// One player had the best value and took the played cards plus the pot.
    Won { winner: PlayerId, cards_won: usize },
    /// No unique best value; played cards went to the pot.
    ///
    /// `swept_by` is set when the tie left a single player with cards:
    /// that player takes the pot and the game ends.
    Tie {
        pot_size: usize,
        swept_by: Option<PlayerId>,
    },
}

/// One line of the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub cards: usize,
    pub active: bool,
}

/// State of one game.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    pub(crate) players: PlayerMap<Player>,
    pub(crate) active: PlayerId,
    pub(crate) phase: Phase,
    pub(crate) chosen_attribute: Option<AttributeKey>,
    pub(crate) played: BTreeMap<PlayerId, Arc<Card>>,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) outcome: Option<RoundOutcome>,
    pub(crate) round: u32,
    pub(crate) pot: Deck,
    seed: u64,
    dealt_cards: usize,
}

impl GameState {
    /// Start a game from dealt players.
    ///
    /// Enters `Choose`, or `GameOver` straight away if fewer than two
    /// players received cards.
    pub(crate) fn from_deal(players: PlayerMap<Player>, seed: u64) -> Self {
        let dealt_cards = players.values().map(Player::deck_size).sum();

        let mut state = Self {
            players,
            active: PlayerId::new(0),
            phase: Phase::Choose,
            chosen_attribute: None,
            played: BTreeMap::new(),
            winner: None,
            outcome: None,
            round: 1,
            pot: Deck::new(),
            seed,
            dealt_cards,
        };
        state.enter_next_phase();
        state
    }

    pub(crate) fn expect_phase(
        &self,
        operation: &'static str,
        expected: Phase,
    ) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                operation,
                expected,
                actual: self.phase,
            })
        }
    }

    /// Move into `Choose` for the current round, or `GameOver` if the
    /// game has been decided.
    pub(crate) fn enter_next_phase(&mut self) {
        let alive = self.alive_players();

        if alive.len() <= 1 {
            self.phase = Phase::GameOver;
            info!(
                round = self.round,
                result = ?self.result(),
                "game over"
            );
            return;
        }

        self.repair_active(&alive);
        self.phase = Phase::Choose;
    }

    /// Hand the turn to the first of `alive` if the active player holds no
    /// cards. Does nothing when nobody is alive.
    pub(crate) fn repair_active(&mut self, alive: &[PlayerId]) {
        if let Some(&first) = alive.first() {
            if !alive.contains(&self.active) {
                trace!(from = %self.active, to = %first, "active player eliminated, reassigning");
                self.active = first;
            }
        }
    }

    // === Players ===

    /// All players in seat order, including eliminated ones.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Players holding at least one card, in ascending index order.
    #[must_use]
    pub fn alive_players(&self) -> AlivePlayers {
        self.players
            .iter()
            .filter(|(_, player)| player.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    /// Whose turn it is to choose.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// The card the active player chooses from.
    #[must_use]
    pub fn active_top_card(&self) -> Option<&Arc<Card>> {
        self.active_player().top_card()
    }

    // === Turn ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Attribute chosen for the round on display. Set only in `Reveal`.
    #[must_use]
    pub fn chosen_attribute(&self) -> Option<AttributeKey> {
        self.chosen_attribute
    }

    /// Cards revealed this round, by player. Empty outside `Reveal`.
    ///
    /// These are already in their new owner's deck or the pot.
    #[must_use]
    pub fn played(&self) -> &BTreeMap<PlayerId, Arc<Card>> {
        &self.played
    }

    /// Round winner, `None` for a tie or outside `Reveal`.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Summary of the round on display, e.g. "Player 2 wins the round!".
    #[must_use]
    pub fn outcome_text(&self) -> Option<String> {
        self.outcome.map(|outcome| match outcome {
            RoundOutcome::Won { winner, .. } => {
                format!("{} wins the round!", self.players[winner].name)
            }
            RoundOutcome::Tie { swept_by: None, .. } => "Tie - cards go to the pot.".to_string(),
            RoundOutcome::Tie {
                swept_by: Some(survivor),
                ..
            } => format!(
                "Tie - {} is the last player with cards and takes the pot.",
                self.players[survivor].name
            ),
        })
    }

    // === Cards ===

    /// Tie pot, in the order cards were added.
    #[must_use]
    pub fn pot(&self) -> &Deck {
        &self.pot
    }

    /// Cards currently in decks and the pot. Constant for the whole game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.values().map(Player::deck_size).sum::<usize>() + self.pot.len()
    }

    /// Cards dealt at the start of the game.
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.dealt_cards
    }

    /// Seed used for the deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Scoreboard: every player's card count and who is active.
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|(id, player)| Standing {
                player: id,
                name: player.name.clone(),
                cards: player.deck_size(),
                active: id == self.active,
            })
            .collect()
    }

    // === End of game ===

    /// The result, once at most one player holds cards.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.alive_players().as_slice() {
            [] => Some(GameResult::Draw),
            [only] => Some(GameResult::Winner(*only)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }
}
