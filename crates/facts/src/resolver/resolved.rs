//! Resolution results with per-fact provenance.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::models::{FactKey, FactMap, FactValue, TargetDate};

/// Where a resolved value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactSource {
    /// The live snapshot; no historical value existed for the key.
    Current,
    /// The per-month table (2020 onward).
    Monthly,
    /// The per-year table (before 2020).
    Yearly,
    /// The 1914-2004 supplemental table.
    Extended,
}

impl FactSource {
    pub fn is_historical(&self) -> bool {
        !matches!(self, Self::Current)
    }
}

/// A single resolved value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedFact {
    pub value: FactValue,
    pub source: FactSource,
}

/// Outcome of the live snapshot fetch for one resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LiveFetchStatus {
    /// The provider answered with `keys` values.
    Fetched { provider: String, keys: usize },
    /// The provider returned an error.
    Failed { provider: String, message: String },
    /// The provider did not answer within the configured timeout.
    TimedOut {
        provider: String,
        #[serde(rename = "after_ms", serialize_with = "serialize_millis")]
        after: Duration,
    },
}

impl LiveFetchStatus {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }
}

fn serialize_millis<S>(after: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(after.as_millis()).unwrap_or(u64::MAX))
}

/// Full result of resolving one date.
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedFacts {
    /// The parsed date, or `None` when the input was malformed.
    pub date: Option<TargetDate>,
    pub live: LiveFetchStatus,
    pub facts: HashMap<FactKey, ResolvedFact>,
}

impl ResolvedFacts {
    pub fn get(&self, key: &FactKey) -> Option<&FactValue> {
        self.facts.get(key).map(|fact| &fact.value)
    }

    pub fn source(&self, key: &FactKey) -> Option<FactSource> {
        self.facts.get(key).map(|fact| fact.source)
    }

    /// Number of values that came from a historical table.
    pub fn historical_count(&self) -> usize {
        self.facts
            .values()
            .filter(|fact| fact.source.is_historical())
            .count()
    }

    /// Drop provenance and keep only the key -> value mapping.
    pub fn into_map(self) -> FactMap {
        self.facts
            .into_iter()
            .map(|(key, fact)| (key, fact.value))
            .collect()
    }
}
