//! Keepsake Historical Facts Crate
//!
//! Resolves date-keyed trivia and economic facts ("GALLON OF GASOLINE",
//! "PRESIDENT", "US POPULATION", ...) for milestone keepsake cards.
//!
//! # Overview
//!
//! Given a `YYYY-MM-DD` date, the resolver:
//! - Picks the monthly table (2020 onward) or the yearly table (earlier)
//! - Overlays the extended table for 1914-2004
//! - Fills any remaining keys from a live "current snapshot" provider
//!
//! Resolution never fails. Malformed dates and live-fetch failures shrink
//! the result instead of producing an error.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +---------------------------+
//! |   Static tables  |     | CurrentSnapshotProvider   |  (sheet, static, ...)
//! | monthly / yearly |     +---------------------------+
//! |    / extended    |                  |
//! +------------------+                  |
//!          |                            |
//!          v                            v
//!        +--------------------------------+
//!        |     HistoricalFactResolver     |
//!        +--------------------------------+
//!                        |
//!                        v
//!                 FactKey -> FactValue
//! ```
//!
//! # Core Types
//!
//! - [`FactKey`] - Known fact identifiers, plus `Custom` for live-only keys
//! - [`FactValue`] - Pre-formatted display string
//! - [`HistoricalFactResolver`] - The merge entry point
//! - [`ResolvedFacts`] - Resolution result with per-fact [`FactSource`]

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod tables;

pub use errors::FactsError;

pub use models::{CustomKey, FactKey, FactMap, FactValue, TargetDate, Year, YearMonth};

pub use provider::{CurrentSnapshotProvider, SheetSnapshotProvider, StaticSnapshotProvider};

pub use resolver::{
    FactSource, HistoricalFactResolver, LiveFetchStatus, ResolvedFact, ResolvedFacts,
    ResolverConfig,
};

pub use tables::{
    ExtendedTable, FactTables, MonthlyTable, YearBucket, YearlyTable, EXTENDED_FIRST_YEAR,
    EXTENDED_LAST_YEAR, MONTHLY_FIRST_YEAR,
};
