use crate::errors::FactsError;
use crate::models::{FactKey, FactValue, Year};

use super::period_table::PeriodTable;
use super::MONTHLY_FIRST_YEAR;

/// Per-year values for years before 2020.
#[derive(Clone, Debug, Default)]
pub struct YearlyTable {
    inner: PeriodTable<Year>,
}

impl YearlyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `{ "<KEY>": { "YYYY": "<value>" } }`.
    pub fn from_json(json: &str) -> Result<Self, FactsError> {
        let inner = PeriodTable::from_json("yearly", json, |year: &Year| {
            *year < MONTHLY_FIRST_YEAR
        })?;
        Ok(Self { inner })
    }

    pub fn insert(
        &mut self,
        key: FactKey,
        year: Year,
        value: impl Into<FactValue>,
    ) -> Option<FactValue> {
        self.inner.insert(key, year, value.into())
    }

    pub fn get(&self, key: &FactKey, year: Year) -> Option<&FactValue> {
        self.inner.get(key, year)
    }

    pub fn keys(&self) -> impl Iterator<Item = &FactKey> {
        self.inner.keys()
    }

    pub fn values_at(&self, year: Year) -> impl Iterator<Item = (&FactKey, &FactValue)> {
        self.inner.values_at(year)
    }

    pub fn span(&self) -> Option<(Year, Year)> {
        self.inner.span()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_and_lookup() {
        let table = YearlyTable::from_json(
            r#"{ "PRESIDENT": { "1971": "Richard Nixon" }, "DOZEN EGGS": { "1971": "$0.63" } }"#,
        )
        .unwrap();

        assert_eq!(
            table.get(&FactKey::President, 1971).map(|v| v.as_ref()),
            Some("Richard Nixon")
        );
        assert_eq!(table.values_at(1971).count(), 2);
        assert_eq!(table.values_at(1972).count(), 0);
    }

    #[test]
    fn test_from_json_rejects_2020_and_later() {
        let err = YearlyTable::from_json(r#"{ "PRESIDENT": { "2020": "Donald Trump" } }"#)
            .unwrap_err();
        assert!(matches!(err, FactsError::Table { table: "yearly", .. }));
    }

    #[test]
    fn test_from_json_rejects_non_year_periods() {
        for period in ["71", "1971-01", "19711", "abcd"] {
            let json = format!(r#"{{ "PRESIDENT": {{ "{period}": "Richard Nixon" }} }}"#);
            assert!(YearlyTable::from_json(&json).is_err(), "accepted {period}");
        }
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        let err = YearlyTable::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, FactsError::Table { .. }));
    }
}
