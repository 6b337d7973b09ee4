//! The fixed attribute set and its comparison rules.
//!
//! Every card carries the same eight numeric attributes. Each one is
//! tagged with a [`Rule`] saying whether the larger or the smaller value
//! wins. A value may be missing (`None`); see `rules::compare` for how
//! missing values score.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which direction wins for an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Larger value wins.
    Higher,
    /// Smaller value wins (times, years).
    Lower,
}

/// One of the fixed attribute keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    TopSpeed,
    Acceleration,
    Horsepower,
    Weight,
    EngineSize,
    Price,
    Rpm,
    ReleaseYear,
}

impl AttributeKey {
    /// All keys in display order.
    pub const ALL: [AttributeKey; 8] = [
        AttributeKey::TopSpeed,
        AttributeKey::Acceleration,
        AttributeKey::Horsepower,
        AttributeKey::Weight,
        AttributeKey::EngineSize,
        AttributeKey::Price,
        AttributeKey::Rpm,
        AttributeKey::ReleaseYear,
    ];

    /// The comparison rule for this attribute.
    #[must_use]
    pub const fn rule(self) -> Rule {
        match self {
            AttributeKey::TopSpeed
            | AttributeKey::Horsepower
            | AttributeKey::EngineSize
            | AttributeKey::Price
            | AttributeKey::Rpm => Rule::Higher,
            AttributeKey::Acceleration | AttributeKey::Weight | AttributeKey::ReleaseYear => {
                Rule::Lower
            }
        }
    }

    /// Catalog field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AttributeKey::TopSpeed => "top_speed",
            AttributeKey::Acceleration => "acceleration",
            AttributeKey::Horsepower => "horsepower",
            AttributeKey::Weight => "weight",
            AttributeKey::EngineSize => "engine_size",
            AttributeKey::Price => "price",
            AttributeKey::Rpm => "rpm",
            AttributeKey::ReleaseYear => "release_year",
        }
    }

    /// Human-readable label with units.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AttributeKey::TopSpeed => "Top Speed (km/h)",
            AttributeKey::Acceleration => "0-100 (s)",
            AttributeKey::Horsepower => "Horsepower (hp)",
            AttributeKey::Weight => "Weight (kg)",
            AttributeKey::EngineSize => "Engine Size (L)",
            AttributeKey::Price => "Price (EUR)",
            AttributeKey::Rpm => "RPM",
            AttributeKey::ReleaseYear => "Release Year (older wins)",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown attribute name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute `{0}`")]
pub struct UnknownAttribute(pub String);

impl FromStr for AttributeKey {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}

/// A card's attribute values.
///
/// Fixed-shape: one nullable field per key. Fields absent from a catalog
/// record deserialize to `None`; unknown fields are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub top_speed: Option<f64>,
    pub acceleration: Option<f64>,
    pub horsepower: Option<f64>,
    pub weight: Option<f64>,
    pub engine_size: Option<f64>,
    pub price: Option<f64>,
    pub rpm: Option<f64>,
    pub release_year: Option<f64>,
}

impl Attributes {
    /// Get a value by key.
    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<f64> {
        match key {
            AttributeKey::TopSpeed => self.top_speed,
            AttributeKey::Acceleration => self.acceleration,
            AttributeKey::Horsepower => self.horsepower,
            AttributeKey::Weight => self.weight,
            AttributeKey::EngineSize => self.engine_size,
            AttributeKey::Price => self.price,
            AttributeKey::Rpm => self.rpm,
            AttributeKey::ReleaseYear => self.release_year,
        }
    }

    /// Set a value (builder pattern).
    #[must_use]
    pub fn with(mut self, key: AttributeKey, value: impl Into<Option<f64>>) -> Self {
        let slot = match key {
            AttributeKey::TopSpeed => &mut self.top_speed,
            AttributeKey::Acceleration => &mut self.acceleration,
            AttributeKey::Horsepower => &mut self.horsepower,
            AttributeKey::Weight => &mut self.weight,
            AttributeKey::EngineSize => &mut self.engine_size,
            AttributeKey::Price => &mut self.price,
            AttributeKey::Rpm => &mut self.rpm,
            AttributeKey::ReleaseYear => &mut self.release_year,
        };
        *slot = value.into();
        self
    }

    /// Keys whose value is missing.
    pub fn missing(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        AttributeKey::ALL
            .into_iter()
            .filter(move |&key| self.get(key).is_none())
    }
}
