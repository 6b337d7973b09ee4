//! Card catalog: loading, validation and the process-wide cache.
//!
//! A catalog is a JSON array of card records:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Koenigsegg Jesko", "image": "jesko.png",
//!     "attributes": { "top_speed": 480, "acceleration": 2.5 } }
//! ]
//! ```
//!
//! `id`, `name` and `attributes` are required. Attribute keys that are
//! absent load as `None`, as does a missing `image`. Loading is
//! deterministic: cards keep their source order.
//!
//! The catalog is immutable after loading. Engines hold it through an
//! `Arc`, either injected directly or taken from [`load_cached`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, info, trace};

use super::definition::{Card, CardId};
use crate::error::CatalogError;

/// Fields every record must carry.
const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "attributes"];

static CACHED: OnceLock<Arc<Catalog>> = OnceLock::new();

/// An ordered, validated set of cards.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Arc<Card>>,
    index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Build a catalog from in-memory cards.
    ///
    /// Fails if two cards share an id.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for card in cards {
            if catalog.index.contains_key(&card.id) {
                return Err(CatalogError::DuplicateId(card.id.to_string()));
            }
            catalog.index.insert(card.id.clone(), catalog.cards.len());
            catalog.cards.push(Arc::new(card));
        }

        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<Value> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Parse a catalog from a reader yielding JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let records: Vec<Value> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "reading card catalog");
        Self::from_reader(BufReader::new(file))
    }

    fn from_records(records: Vec<Value>) -> Result<Self, CatalogError> {
        let mut cards = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            if let Some(fields) = record.as_object() {
                if let Some(field) = REQUIRED_FIELDS.into_iter().find(|f| !fields.contains_key(*f)) {
                    return Err(CatalogError::MissingField { index, field });
                }
            }

            let card: Card = serde_json::from_value(record)?;
            for key in card.attributes.missing() {
                trace!(card = %card.id, attribute = %key, "attribute missing, treated as null");
            }
            if card.image.is_none() {
                trace!(card = %card.id, "image missing, treated as null");
            }
            cards.push(card);
        }

        let catalog = Self::from_cards(cards)?;
        info!(cards = catalog.len(), "loaded card catalog");
        Ok(catalog)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Arc<Card>> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in source order.
    #[must_use]
    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }
}

/// Load the catalog at `path` once per process.
///
/// The first successful call reads the file; every later call returns the
/// same catalog without touching the filesystem, whatever path it names.
/// A failed load leaves the cache empty so a later call can retry.
pub fn load_cached(path: impl AsRef<Path>) -> Result<Arc<Catalog>, CatalogError> {
    if let Some(catalog) = CACHED.get() {
        return Ok(Arc::clone(catalog));
    }

    let loaded = Arc::new(Catalog::from_path(path)?);
    // Another caller may have won the race; theirs is kept.
    Ok(Arc::clone(CACHED.get_or_init(|| loaded)))
}

/// The cached catalog, if one has been loaded.
#[must_use]
pub fn cached() -> Option<Arc<Catalog>> {
    CACHED.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::AttributeKey;

    const SAMPLE: &str = r#"[
        {"id": 1, "name": "Jesko", "image": "jesko.png",
         "attributes": {"top_speed": 480, "acceleration": 2.5, "release_year": 2019}},
        {"id": "two", "name": "Valkyrie", "attributes": {"horsepower": 1160}}
    ]"#;

    #[test]
    fn test_load_and_normalize() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();

        assert_eq!(catalog.len(), 2);
        let names: Vec<_> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Jesko", "Valkyrie"]);

        let valkyrie = catalog.get(&CardId::from("two")).unwrap();
        assert_eq!(valkyrie.image, None);
        assert_eq!(valkyrie.value(AttributeKey::Horsepower), Some(1160.0));
        assert_eq!(valkyrie.value(AttributeKey::TopSpeed), None);

        let jesko = catalog.get(&CardId::from(1)).unwrap();
        assert_eq!(jesko.image.as_deref(), Some("jesko.png"));
    }

    #[test]
    fn test_missing_required_field() {
        let json = r#"[
            {"id": 1, "name": "A", "attributes": {}},
            {"id": 2, "attributes": {}}
        ]"#;

        match Catalog::from_json_str(json) {
            Err(CatalogError::MissingField { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "name");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_attributes_field() {
        let json = r#"[{"id": 1, "name": "A"}]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::MissingField { index: 0, field: "attributes" })
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let json = r#"[
            {"id": 5, "name": "A", "attributes": {}},
            {"id": "5", "name": "B", "attributes": {}}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::DuplicateId(id)) if id == "5"
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            Catalog::from_json_str(r#"[{"id": 1, "name": "A", "attributes": {"rpm": "fast"}}]"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_empty_catalog_loads() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged_while(load: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, load);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_every_load_logs_card_count() {
        let from_str = logged_while(|| {
            Catalog::from_json_str(SAMPLE).unwrap();
        });
        assert!(from_str.contains("loaded card catalog"), "{}", from_str);
        assert!(from_str.contains("cards=2"), "{}", from_str);

        let from_reader = logged_while(|| {
            Catalog::from_reader(SAMPLE.as_bytes()).unwrap();
        });
        assert!(from_reader.contains("cards=2"), "{}", from_reader);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Catalog::from_path("/nonexistent/cards.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
