use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single indicator value as stored in a flattened profile.
///
/// Upstream data mixes numbers with categorical strings, flags, nulls, and
/// the occasional list. Only finite numbers take part in scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl IndicatorValue {
    /// The numeric value, if this is a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for IndicatorValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for IndicatorValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Immutable flattened profile for one country.
///
/// Keys are dotted indicator paths prefixed with a four-digit year, e.g.
/// `2023.digital_connectivity.mobile_ownership_percent`. Built once per
/// fetch and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountryProfile {
    pub country_code: String,
    indicators: BTreeMap<String, IndicatorValue>,
}

impl CountryProfile {
    pub fn new(
        country_code: impl Into<String>,
        indicators: BTreeMap<String, IndicatorValue>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            indicators,
        }
    }

    /// A profile with no indicators at all.
    pub fn empty(country_code: impl Into<String>) -> Self {
        Self::new(country_code, BTreeMap::new())
    }

    /// Merge stored chunks into one profile. Later chunks override keys
    /// from earlier ones.
    pub fn from_chunks<I>(country_code: impl Into<String>, chunks: I) -> Self
    where
        I: IntoIterator<Item = BTreeMap<String, IndicatorValue>>,
    {
        let mut indicators = BTreeMap::new();
        for chunk in chunks {
            indicators.extend(chunk);
        }
        Self::new(country_code, indicators)
    }

    pub fn get(&self, key: &str) -> Option<&IndicatorValue> {
        self.indicators.get(key)
    }

    /// Iterate indicators in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &IndicatorValue)> {
        self.indicators.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}
