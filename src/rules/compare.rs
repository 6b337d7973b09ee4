//! Attribute comparison.
//!
//! Each played card contributes one value for the chosen attribute. The
//! value is mapped to a [`Score`]; a missing value is always the worst
//! possible score, so it can never win, it loses to any concrete value,
//! and it ties only with other missing values. The unique best score wins;
//! any tie for best (exact equality, no epsilon) is no winner.
//!
//! ```
//! use top_trumps::core::PlayerId;
//! use top_trumps::cards::Rule;
//! use top_trumps::rules::compare_values;
//!
//! let p1 = PlayerId::new(1);
//! let p2 = PlayerId::new(2);
//!
//! assert_eq!(compare_values([(p1, Some(3.2)), (p2, Some(2.8))], Rule::Lower), Some(p2));
//! assert_eq!(compare_values([(p1, None), (p2, Some(2.8))], Rule::Lower), Some(p2));
//! assert_eq!(compare_values([(p1, None), (p2, None)], Rule::Higher), None);
//! ```

use smallvec::SmallVec;

use crate::cards::{AttributeKey, Card, Rule};
use crate::core::PlayerId;

/// A value ranked for comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Score {
    /// No data. Ranks below every value under either rule.
    Missing,
    Value(f64),
}

impl Score {
    /// Score a raw value. NaN is treated as missing.
    #[must_use]
    pub fn new(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => Score::Value(v),
            _ => Score::Missing,
        }
    }

    /// Does `self` strictly beat `other` under `rule`?
    #[must_use]
    pub fn beats(self, other: Score, rule: Rule) -> bool {
        match (self, other) {
            (Score::Missing, _) => false,
            (Score::Value(_), Score::Missing) => true,
            (Score::Value(a), Score::Value(b)) => match rule {
                Rule::Higher => a > b,
                Rule::Lower => a < b,
            },
        }
    }
}

/// Decide the winner among `(player, value)` pairs under `rule`.
///
/// Returns `None` for a tie: all values missing, two or more players
/// sharing the best value, or no entries at all.
pub fn compare_values(
    values: impl IntoIterator<Item = (PlayerId, Option<f64>)>,
    rule: Rule,
) -> Option<PlayerId> {
    let scored: SmallVec<[(PlayerId, Score); 4]> = values
        .into_iter()
        .map(|(player, value)| (player, Score::new(value)))
        .collect();

    if scored.iter().all(|(_, score)| *score == Score::Missing) {
        return None;
    }

    let best = scored
        .iter()
        .map(|&(_, score)| score)
        .fold(Score::Missing, |best, score| if score.beats(best, rule) { score } else { best });

    let mut leaders = scored.iter().filter(|(_, score)| *score == best);
    match (leaders.next(), leaders.next()) {
        (Some(&(player, _)), None) => Some(player),
        _ => None,
    }
}

/// Decide the winner of a reveal for `attribute`.
pub fn compare_cards<'a>(
    played: impl IntoIterator<Item = (PlayerId, &'a Card)>,
    attribute: AttributeKey,
) -> Option<PlayerId> {
    compare_values(
        played
            .into_iter()
            .map(|(player, card)| (player, card.value(attribute))),
        attribute.rule(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Attributes;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn card(attribute: AttributeKey, value: Option<f64>) -> Card {
        Card::new("c", "c", Attributes::default().with(attribute, value))
    }

    #[test]
    fn test_higher_rule() {
        let a = card(AttributeKey::TopSpeed, Some(300.0));
        let b = card(AttributeKey::TopSpeed, Some(250.0));
        assert_eq!(
            compare_cards([(p(1), &a), (p(2), &b)], AttributeKey::TopSpeed),
            Some(p(1))
        );
    }

    #[test]
    fn test_lower_rule() {
        let a = card(AttributeKey::Acceleration, Some(3.2));
        let b = card(AttributeKey::Acceleration, Some(2.8));
        assert_eq!(
            compare_cards([(p(1), &a), (p(2), &b)], AttributeKey::Acceleration),
            Some(p(2))
        );
    }

    #[test]
    fn test_exact_tie() {
        let a = card(AttributeKey::Horsepower, Some(500.0));
        let b = card(AttributeKey::Horsepower, Some(500.0));
        assert_eq!(
            compare_cards([(p(1), &a), (p(2), &b)], AttributeKey::Horsepower),
            None
        );
    }

    #[test]
    fn test_all_missing_is_tie_for_every_attribute() {
        let blank = Card::new("b", "Blank", Attributes::default());
        for key in AttributeKey::ALL {
            assert_eq!(compare_cards([(p(1), &blank), (p(2), &blank)], key), None);
        }
    }

    #[test]
    fn test_missing_always_loses() {
        for key in AttributeKey::ALL {
            for value in [-1.0e9, 0.0, 1.0e9] {
                let known = card(key, Some(value));
                let unknown = card(key, None);
                assert_eq!(compare_cards([(p(0), &unknown), (p(1), &known)], key), Some(p(1)));
                assert_eq!(compare_cards([(p(0), &known), (p(1), &unknown)], key), Some(p(0)));
            }
        }
    }

    #[test]
    fn test_tie_for_best_among_three() {
        let values = [(p(0), Some(2.0)), (p(1), Some(9.0)), (p(2), Some(9.0))];
        assert_eq!(compare_values(values, Rule::Higher), None);
        assert_eq!(compare_values(values, Rule::Lower), Some(p(0)));
    }

    #[test]
    fn test_tie_below_best_does_not_matter() {
        let values = [(p(0), Some(1.0)), (p(1), Some(1.0)), (p(2), None), (p(3), Some(4.0))];
        assert_eq!(compare_values(values, Rule::Higher), Some(p(3)));
    }

    #[test]
    fn test_no_epsilon() {
        let values = [(p(0), Some(0.1 + 0.2)), (p(1), Some(0.3))];
        assert_eq!(compare_values(values, Rule::Higher), Some(p(0)));
    }

    #[test]
    fn test_nan_scores_as_missing() {
        assert_eq!(Score::new(Some(f64::NAN)), Score::Missing);
        let values = [(p(0), Some(f64::NAN)), (p(1), Some(1.0))];
        assert_eq!(compare_values(values, Rule::Lower), Some(p(1)));
    }

    #[test]
    fn test_empty_is_tie() {
        assert_eq!(compare_values(std::iter::empty(), Rule::Higher), None);
    }

    #[test]
    fn test_score_beats() {
        assert!(Score::Value(1.0).beats(Score::Missing, Rule::Higher));
        assert!(Score::Value(1.0).beats(Score::Missing, Rule::Lower));
        assert!(!Score::Missing.beats(Score::Missing, Rule::Higher));
        assert!(!Score::Missing.beats(Score::Value(f64::MAX), Rule::Lower));
        assert!(Score::Value(2.0).beats(Score::Value(1.0), Rule::Higher));
        assert!(Score::Value(1.0).beats(Score::Value(2.0), Rule::Lower));
    }
}
