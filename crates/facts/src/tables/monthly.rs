use crate::errors::FactsError;
use crate::models::{FactKey, FactValue, YearMonth};

use super::period_table::PeriodTable;
use super::MONTHLY_FIRST_YEAR;

/// Per-month values for January 2020 onward.
#[derive(Clone, Debug, Default)]
pub struct MonthlyTable {
    inner: PeriodTable<YearMonth>,
}

impl MonthlyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `{ "<KEY>": { "YYYY-MM": "<value>" } }`.
    ///
    /// Fails on periods before 2020, malformed periods or duplicate values.
    pub fn from_json(json: &str) -> Result<Self, FactsError> {
        let inner = PeriodTable::from_json("monthly", json, |period: &YearMonth| {
            period.year() >= MONTHLY_FIRST_YEAR
        })?;
        Ok(Self { inner })
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: FactKey,
        period: YearMonth,
        value: impl Into<FactValue>,
    ) -> Option<FactValue> {
        self.inner.insert(key, period, value.into())
    }

    pub fn get(&self, key: &FactKey, period: YearMonth) -> Option<&FactValue> {
        self.inner.get(key, period)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FactKey> {
        self.inner.keys()
    }

    /// All values recorded for a month.
    pub fn values_at(&self, period: YearMonth) -> impl Iterator<Item = (&FactKey, &FactValue)> {
        self.inner.values_at(period)
    }

    /// First and last month with any data.
    pub fn span(&self) -> Option<(YearMonth, YearMonth)> {
        self.inner.span()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
