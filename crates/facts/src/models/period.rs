use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::FactsError;

/// Calendar month used as the monthly table's period key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build a year-month, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, FactsError> {
        if !(1..=12).contains(&month) {
            return Err(FactsError::InvalidPeriod(format!("{year}-{month}")));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = FactsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FactsError::InvalidPeriod(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = FactsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<YearMonth> for String {
    fn from(period: YearMonth) -> Self {
        period.to_string()
    }
}

/// A validated `YYYY-MM-DD` calendar date to resolve facts for.
///
/// Only the strict 4-2-2 digit form is accepted, and the day must exist on
/// the calendar (`2021-02-29` is rejected). Time-of-day is never part of
/// the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    pub fn parse(input: &str) -> Result<Self, FactsError> {
        let invalid = || FactsError::InvalidDate(input.to_string());
        let bytes = input.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shape_ok {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.0.year(),
            month: self.0.month(),
        }
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<TargetDate> for String {
    fn from(date: TargetDate) -> Self {
        date.to_string()
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_display_pads() {
        let period = YearMonth::new(2020, 3).unwrap();
        assert_eq!(period.to_string(), "2020-03");
    }

    #[test]
    fn test_year_month_parse() {
        let period: YearMonth = "2024-11".parse().unwrap();
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 11);

        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("2024-1".parse::<YearMonth>().is_err());
        assert!("24-01".parse::<YearMonth>().is_err());
        assert!("2024/01".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_target_date_accepts_strict_iso() {
        let date = TargetDate::parse("1971-11-15").unwrap();
        assert_eq!(date.year(), 1971);
        assert_eq!(date.month(), 11);
        assert_eq!(date.year_month().to_string(), "1971-11");
        assert_eq!(date.to_string(), "1971-11-15");
    }

    #[test]
    fn test_target_date_rejects_malformed_input() {
        for input in [
            "",
            "not-a-date",
            "1971-11-15T00:00:00",
            "1971-1-15",
            "71-11-15",
            "1971/11/15",
            " 1971-11-15",
            "+197-11-15",
            "１９７１-11-15",
        ] {
            assert!(TargetDate::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_target_date_rejects_impossible_days() {
        assert!(TargetDate::parse("2021-02-29").is_err());
        assert!(TargetDate::parse("2020-02-29").is_ok());
        assert!(TargetDate::parse("2020-04-31").is_err());
        assert!(TargetDate::parse("2020-00-10").is_err());
    }
}
