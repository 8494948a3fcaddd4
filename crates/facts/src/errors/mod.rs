//! Error types for the facts crate.
//!
//! Most of these never reach a caller of the resolver: date and live-fetch
//! failures are absorbed into a smaller result. They surface from the
//! lower-level APIs (table loading, providers, date parsing) for callers that
//! use those directly.

use thiserror::Error;

/// Errors that can occur while loading tables or fetching snapshots.
#[derive(Error, Debug)]
pub enum FactsError {
    /// The input was not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// A table period was not a valid `YYYY-MM` month or year.
    #[error("Invalid period: {0:?}")]
    InvalidPeriod(String),

    /// A table asset could not be parsed or violated its coverage rules.
    #[error("Table error: {table} - {message}")]
    Table {
        /// Which table failed ("monthly", "yearly", ...)
        table: &'static str,
        message: String,
    },

    /// The live snapshot source answered but the answer was unusable.
    #[error("Live fetch failed: {provider} - {message}")]
    LiveFetch {
        /// The provider that failed
        provider: String,
        message: String,
    },

    /// The live snapshot source did not answer in time.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A network error occurred while talking to a live source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl FactsError {
    /// Whether the error came from the live snapshot path, as opposed to
    /// local data or caller input.
    pub fn is_live_failure(&self) -> bool {
        matches!(
            self,
            Self::LiveFetch { .. } | Self::Timeout { .. } | Self::Network(_)
        )
    }
}
