//! Date-keyed fact resolution.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 HistoricalFactResolver                    │
//! │                                                           │
//! │  "YYYY-MM-DD" ──► TargetDate ──┬─► year >= 2020: monthly  │
//! │       │ (malformed: skip)      └─► year <  2020: yearly   │
//! │       │                                   │               │
//! │       │                  1914..=2004 ──► extended overlay │
//! │       ▼                                   │               │
//! │  CurrentSnapshotProvider ──► base ◄── historical overlay  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Precedence
//!
//! For every key, the highest available layer wins:
//!
//! 1. **Extended table** (only for 1914-2004)
//! 2. **Monthly or yearly table** (granularity chosen by the target year)
//! 3. **Current snapshot** (always fetched, failures treated as empty)

mod config;
mod fact_resolver;
mod resolved;

pub use config::{ResolverConfig, DEFAULT_LIVE_FETCH_TIMEOUT};
pub use fact_resolver::HistoricalFactResolver;
pub use resolved::{FactSource, LiveFetchStatus, ResolvedFact, ResolvedFacts};
