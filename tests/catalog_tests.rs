//! Loading the bundled catalog and the process-wide cache.
//!
//! The cache is process-wide, so everything touching it lives in a single
//! test.

use std::path::PathBuf;
use std::sync::Arc;

use top_trumps::cards::{cached, load_cached, AttributeKey, CardId, Catalog};
use top_trumps::error::CatalogError;
use top_trumps::game::TopTrumps;

fn data(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

/// Absent attributes and images in the bundled catalog load as `None`.
#[test]
fn test_bundled_catalog_normalizes_missing_fields() {
    let catalog = Catalog::from_path(data("hypercars.json")).unwrap();
    assert_eq!(catalog.len(), 12);

    let nevera = catalog.get(&CardId::from(3)).unwrap();
    assert_eq!(nevera.name, "Rimac Nevera");
    assert_eq!(nevera.value(AttributeKey::EngineSize), None);
    assert_eq!(nevera.value(AttributeKey::Rpm), None);
    assert_eq!(nevera.value(AttributeKey::Acceleration), Some(1.85));

    let valkyrie = catalog.get(&CardId::from(4)).unwrap();
    assert_eq!(valkyrie.image, None);

    let venom = catalog.get(&CardId::from(9)).unwrap();
    assert_eq!(venom.value(AttributeKey::ReleaseYear), None);
}

/// Two loads of the same file give the same card order.
#[test]
fn test_loading_is_deterministic() {
    let a = Catalog::from_path(data("hypercars.json")).unwrap();
    let b = Catalog::from_path(data("hypercars.json")).unwrap();

    let ids = |c: &Catalog| -> Vec<String> { c.iter().map(|card| card.id.to_string()).collect() };
    assert_eq!(ids(&a), ids(&b));
    assert_eq!(ids(&a)[0], "1");
}

/// The cache keeps the first successful load and ignores later paths.
#[test]
fn test_cache_loads_once() {
    assert!(cached().is_none());

    // A failed load leaves the cache empty.
    assert!(matches!(
        load_cached(data("missing.json")),
        Err(CatalogError::Io(_))
    ));
    assert!(cached().is_none());

    let first = load_cached(data("hypercars.json")).unwrap();
    assert_eq!(first.len(), 12);

    // Later calls never touch the filesystem, whatever they name.
    let second = load_cached(data("missing.json")).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &cached().unwrap()));

    let engine = TopTrumps::from_cached(data("missing.json")).unwrap();
    assert!(Arc::ptr_eq(engine.catalog(), &first));
}
