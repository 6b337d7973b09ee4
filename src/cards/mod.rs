//! Card data: the fixed attribute set, card definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `AttributeKey` / `Rule`: the eight comparable attributes and which
//!   direction wins for each
//! - `Attributes`: fixed-shape record of nullable values
//! - `Card`: immutable card, shared by `Arc`
//! - `Catalog`: validated, ordered card set with a process-wide cache

pub mod attributes;
pub mod catalog;
pub mod definition;

pub use attributes::{AttributeKey, Attributes, Rule, UnknownAttribute};
pub use catalog::{cached, load_cached, Catalog};
pub use definition::{Card, CardId};
