//! Card definitions.
//!
//! A `Card` is immutable once loaded. Decks, the pot and the played map
//! all hold `Arc<Card>` handles to the same catalog entry.

use serde::{Deserialize, Deserializer, Serialize};

use super::attributes::{AttributeKey, Attributes};

/// Unique card identifier.
///
/// Catalogs may spell ids as strings or integers; both normalize to the
/// string form, so `7` and `"7"` are the same id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for CardId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => CardId::from(n),
            RawId::Text(s) => CardId(s),
        })
    }
}

/// A playing card.
///
/// ## Example
///
/// ```
/// use top_trumps::cards::{AttributeKey, Attributes, Card};
///
/// let card = Card::new(
///     "chiron",
///     "Bugatti Chiron",
///     Attributes::default().with(AttributeKey::TopSpeed, 420.0),
/// );
///
/// assert_eq!(card.value(AttributeKey::TopSpeed), Some(420.0));
/// assert_eq!(card.value(AttributeKey::Price), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub attributes: Attributes,
    /// Image reference relative to the presentation layer's asset root.
    #[serde(default)]
    pub image: Option<String>,
}

impl Card {
    /// Create a card without an image.
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes,
            image: None,
        }
    }

    /// Set the image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Value of one attribute, `None` when the card has no data for it.
    #[must_use]
    pub fn value(&self, key: AttributeKey) -> Option<f64> {
        self.attributes.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_forms() {
        let from_int: CardId = serde_json::from_str("17").unwrap();
        let from_text: CardId = serde_json::from_str("\"17\"").unwrap();

        assert_eq!(from_int, from_text);
        assert_eq!(from_int.as_str(), "17");
        assert_eq!(format!("{}", CardId::from("p1")), "p1");
    }

    #[test]
    fn test_card_deserialize_without_image() {
        let card: Card = serde_json::from_str(
            r#"{"id": 1, "name": "Zonda", "attributes": {"horsepower": 760}}"#,
        )
        .unwrap();

        assert_eq!(card.id, CardId::from(1));
        assert_eq!(card.image, None);
        assert_eq!(card.value(AttributeKey::Horsepower), Some(760.0));
        assert_eq!(card.value(AttributeKey::Weight), None);
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new("x", "Test", Attributes::default()).with_image("x.png");
        assert_eq!(card.image.as_deref(), Some("x.png"));
    }
}
