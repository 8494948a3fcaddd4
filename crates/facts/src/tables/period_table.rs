//! Shared storage for the monthly and yearly tables.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::errors::FactsError;
use crate::models::{FactKey, FactValue, Year, YearMonth};

/// A period a table can be keyed by.
pub(crate) trait Period: Ord + Copy + fmt::Display {
    fn parse_period(s: &str) -> Result<Self, FactsError>;
}

impl Period for YearMonth {
    fn parse_period(s: &str) -> Result<Self, FactsError> {
        s.parse()
    }
}

impl Period for Year {
    fn parse_period(s: &str) -> Result<Self, FactsError> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FactsError::InvalidPeriod(s.to_string()));
        }
        s.parse().map_err(|_| FactsError::InvalidPeriod(s.to_string()))
    }
}

/// Raw JSON shape of a period table asset: `{ "<KEY>": { "<period>": "<value>" } }`.
type RawTable = HashMap<String, BTreeMap<String, String>>;

/// Per-key, per-period values. At most one value per (key, period).
#[derive(Clone, Debug)]
pub(crate) struct PeriodTable<P> {
    records: HashMap<FactKey, BTreeMap<P, FactValue>>,
}

impl<P: Period> Default for PeriodTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Period> PeriodTable<P> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Parse a JSON asset, checking each period with `in_range`.
    ///
    /// Two spellings of the same key (e.g. "president" and "PRESIDENT") that
    /// both define one period are rejected rather than silently merged.
    pub fn from_json(
        table: &'static str,
        json: &str,
        in_range: impl Fn(&P) -> bool,
    ) -> Result<Self, FactsError> {
        let raw: RawTable = serde_json::from_str(json).map_err(|e| FactsError::Table {
            table,
            message: e.to_string(),
        })?;

        let mut parsed = Self::new();
        for (key_name, periods) in raw {
            let key = FactKey::from(key_name.as_str());
            for (period_text, value) in periods {
                let period = P::parse_period(&period_text).map_err(|e| FactsError::Table {
                    table,
                    message: format!("{} for {}", e, key),
                })?;
                if !in_range(&period) {
                    return Err(FactsError::Table {
                        table,
                        message: format!("period {} for {} is out of range", period, key),
                    });
                }
                if parsed.insert(key.clone(), period, Arc::from(value)).is_some() {
                    return Err(FactsError::Table {
                        table,
                        message: format!("duplicate value for {} at {}", key, period),
                    });
                }
            }
        }
        Ok(parsed)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: FactKey, period: P, value: FactValue) -> Option<FactValue> {
        self.records.entry(key).or_default().insert(period, value)
    }

    pub fn get(&self, key: &FactKey, period: P) -> Option<&FactValue> {
        self.records.get(key)?.get(&period)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FactKey> {
        self.records.keys()
    }

    /// Every value recorded for `period`, one per key.
    pub fn values_at(&self, period: P) -> impl Iterator<Item = (&FactKey, &FactValue)> {
        self.records
            .iter()
            .filter_map(move |(key, series)| series.get(&period).map(|value| (key, value)))
    }

    /// Earliest and latest period across all keys.
    pub fn span(&self) -> Option<(P, P)> {
        let first = self
            .records
            .values()
            .filter_map(|series| series.keys().next())
            .min()?;
        let last = self
            .records
            .values()
            .filter_map(|series| series.keys().next_back())
            .max()?;
        Some((*first, *last))
    }

    pub fn is_empty(&self) -> bool {
        self.records.values().all(BTreeMap::is_empty)
    }
}
