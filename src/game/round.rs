//! The two turn operations: `play_round` and `advance_round`.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::state::{GameState, Phase, RoundOutcome};
use crate::cards::AttributeKey;
use crate::error::GameError;
use crate::rules::compare_cards;

impl GameState {
    /// Play a round on `attribute`. Requires [`Phase::Choose`].
    ///
    /// Every alive player reveals their top card. The unique best value
    /// takes the revealed cards, in player order, followed by the whole
    /// pot, and becomes active. On a tie the revealed cards join the pot
    /// and the turn passes to the next alive player after the current one.
    /// If that player has just run out of cards, the first player still
    /// holding cards takes the turn instead.
    ///
    /// All deck changes happen here; the state then sits in
    /// [`Phase::Reveal`] until [`advance_round`](Self::advance_round).
    /// On error nothing is changed.
    pub fn play_round(&mut self, attribute: AttributeKey) -> Result<RoundOutcome, GameError> {
        self.expect_phase("play_round", Phase::Choose)?;

        // Choose is only entered with two or more alive players.
        let alive = self.alive_players();

        let mut played = BTreeMap::new();
        for &player in &alive {
            if let Some(card) = self.players[player].pop_top() {
                played.insert(player, card);
            }
        }

        let winner = compare_cards(
            played.iter().map(|(&player, card)| (player, card.as_ref())),
            attribute,
        );

        let outcome = match winner {
            Some(winner) => {
                let pot = std::mem::take(&mut self.pot);
                let cards_won = played.len() + pot.len();
                self.players[winner].receive(played.values().cloned().chain(pot));
                self.active = winner;

                RoundOutcome::Won { winner, cards_won }
            }
            None => {
                self.pot.extend(played.values().cloned());

                let position = alive.iter().position(|&p| p == self.active).unwrap_or(0);
                let next = alive[(position + 1) % alive.len()];
                trace!(from = %self.active, to = %next, "tie, passing the turn");
                self.active = next;

                // A tie that empties every deck but one leaves nobody to
                // contest the pot.
                let survivors = self.alive_players();
                let swept_by = match survivors.as_slice() {
                    [survivor] => {
                        let pot = std::mem::take(&mut self.pot);
                        self.players[*survivor].receive(pot);
                        self.active = *survivor;
                        Some(*survivor)
                    }
                    _ => {
                        self.repair_active(&survivors);
                        None
                    }
                };

                RoundOutcome::Tie {
                    pot_size: self.pot.len(),
                    swept_by,
                }
            }
        };

        debug!(
            round = self.round,
            attribute = %attribute,
            outcome = ?outcome,
            pot = self.pot.len(),
            "round resolved"
        );

        self.played = played;
        self.chosen_attribute = Some(attribute);
        self.winner = winner;
        self.outcome = Some(outcome);
        self.phase = Phase::Reveal;

        Ok(outcome)
    }

    /// Finish the round on display. Requires [`Phase::Reveal`].
    ///
    /// Clears the reveal, increments the round counter and returns the new
    /// phase: [`Phase::Choose`] or, once at most one player holds cards,
    /// [`Phase::GameOver`]. Decks, pot and the active player were already
    /// settled by `play_round`, apart from reassigning an eliminated
    /// active player.
    pub fn advance_round(&mut self) -> Result<Phase, GameError> {
        self.expect_phase("advance_round", Phase::Reveal)?;

        self.played.clear();
        self.chosen_attribute = None;
        self.winner = None;
        self.outcome = None;
        self.round += 1;

        self.enter_next_phase();
        Ok(self.phase)
    }
}
