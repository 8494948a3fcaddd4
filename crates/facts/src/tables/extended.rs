//! Supplemental per-year values for 1914-2004.
//!
//! Each key is described by one or more rules. A rule is either an explicit
//! year -> value map or a list of inclusive year-range buckets. Rules for a
//! key are consulted in order and the first one that covers the year wins,
//! which lets a key mix precise recent data with coarse early buckets.
//!
//! The table does not know about the 1914-2004 window; the resolver decides
//! when it is consulted.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{FactKey, FactMap, FactValue, Year};

use super::extended_data as data;

/// An inclusive range of years sharing one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearBucket {
    pub first: Year,
    pub last: Year,
    pub value: FactValue,
}

impl YearBucket {
    pub fn new(first: Year, last: Year, value: impl Into<FactValue>) -> Self {
        Self {
            first,
            last,
            value: value.into(),
        }
    }

    pub fn contains(&self, year: Year) -> bool {
        (self.first..=self.last).contains(&year)
    }
}

#[derive(Clone, Debug)]
enum ExtendedRule {
    Explicit(BTreeMap<Year, FactValue>),
    Buckets(Vec<YearBucket>),
}

impl ExtendedRule {
    fn value_for(&self, year: Year) -> Option<&FactValue> {
        match self {
            Self::Explicit(values) => values.get(&year),
            Self::Buckets(buckets) => buckets
                .iter()
                .find(|bucket| bucket.contains(year))
                .map(|bucket| &bucket.value),
        }
    }
}

/// Rule-based supplemental table.
#[derive(Clone, Debug, Default)]
pub struct ExtendedTable {
    rules: BTreeMap<FactKey, Vec<ExtendedRule>>,
}

impl ExtendedTable {
    /// An extended table with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in 1914-2004 dataset.
    pub fn embedded() -> Self {
        Self::new()
            .with_buckets(FactKey::President, buckets(data::PRESIDENTS))
            .with_buckets(FactKey::VicePresident, buckets(data::VICE_PRESIDENTS))
            .with_buckets(FactKey::Population, buckets(data::POPULATION_BY_DECADE))
            .with_buckets(FactKey::Gold, buckets(data::GOLD_FIXED_ERA))
            .with_explicit(FactKey::Gold, data::GOLD_BY_YEAR.iter().copied())
            .with_buckets(FactKey::Silver, buckets(data::SILVER))
            .with_explicit(FactKey::Gasoline, data::GASOLINE_BY_YEAR.iter().copied())
            .with_buckets(FactKey::Gasoline, buckets(data::GASOLINE_EARLY))
            .with_buckets(FactKey::Bread, buckets(data::BREAD_BY_DECADE))
            .with_buckets(FactKey::Milk, buckets(data::MILK_BY_DECADE))
            .with_buckets(FactKey::Eggs, buckets(data::EGGS_BY_DECADE))
            .with_buckets(FactKey::PostageStamp, buckets(data::POSTAGE_STAMP))
            .with_explicit(FactKey::WorldSeries, data::WORLD_SERIES.iter().copied())
            .with_explicit(FactKey::NumberOneSong, data::NUMBER_ONE_SONGS.iter().copied())
    }

    /// Append an explicit year -> value rule for `key`.
    pub fn with_explicit<V>(
        mut self,
        key: FactKey,
        values: impl IntoIterator<Item = (Year, V)>,
    ) -> Self
    where
        V: Into<FactValue>,
    {
        let values = values
            .into_iter()
            .map(|(year, value)| (year, value.into()))
            .collect();
        self.rules
            .entry(key)
            .or_default()
            .push(ExtendedRule::Explicit(values));
        self
    }

    /// Append a bucket rule for `key`. Earlier buckets win on overlap.
    pub fn with_buckets(mut self, key: FactKey, buckets: Vec<YearBucket>) -> Self {
        self.rules
            .entry(key)
            .or_default()
            .push(ExtendedRule::Buckets(buckets));
        self
    }

    pub fn get(&self, key: &FactKey, year: Year) -> Option<&FactValue> {
        self.rules
            .get(key)?
            .iter()
            .find_map(|rule| rule.value_for(year))
    }

    /// Every value this table defines for `year`.
    pub fn values_for_year(&self, year: Year) -> FactMap {
        self.rules
            .iter()
            .filter_map(|(key, rules)| {
                rules
                    .iter()
                    .find_map(|rule| rule.value_for(year))
                    .map(|value| (key.clone(), Arc::clone(value)))
            })
            .collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &FactKey> {
        self.rules.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn buckets(ranges: &[(Year, Year, &str)]) -> Vec<YearBucket> {
    ranges
        .iter()
        .map(|&(first, last, value)| YearBucket::new(first, last, value))
        .collect()
}
