//! Historical fact resolver - merges static tables with the live snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::models::{FactKey, FactMap, FactValue, TargetDate};
use crate::provider::CurrentSnapshotProvider;
use crate::tables::{FactTables, EXTENDED_FIRST_YEAR, EXTENDED_LAST_YEAR, MONTHLY_FIRST_YEAR};

use super::config::ResolverConfig;
use super::resolved::{FactSource, LiveFetchStatus, ResolvedFact, ResolvedFacts};

/// Resolves the best-known fact values for a date.
///
/// Precedence, lowest to highest:
/// 1. Current snapshot from the injected provider
/// 2. Monthly table (target year >= 2020) or yearly table (target year < 2020)
/// 3. Extended table, only when the target year is within 1914-2004
///
/// A higher layer overwrites a lower one key by key. Resolution never fails:
/// a malformed date contributes no historical values, and a failed or slow
/// live fetch contributes no current values.
///
/// # Example
///
/// ```ignore
/// let resolver = HistoricalFactResolver::new(Arc::new(StaticSnapshotProvider::empty()));
///
/// let facts = resolver.resolve("1971-11-15").await;
/// assert_eq!(facts[&FactKey::President].as_ref(), "Richard Nixon");
/// ```
pub struct HistoricalFactResolver {
    tables: Arc<FactTables>,
    provider: Arc<dyn CurrentSnapshotProvider>,
    config: ResolverConfig,
}

impl HistoricalFactResolver {
    /// Create a resolver over the embedded tables.
    pub fn new(provider: Arc<dyn CurrentSnapshotProvider>) -> Self {
        Self::with_tables(FactTables::embedded(), provider)
    }

    /// Create a resolver over custom tables.
    pub fn with_tables(
        tables: Arc<FactTables>,
        provider: Arc<dyn CurrentSnapshotProvider>,
    ) -> Self {
        Self {
            tables,
            provider,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tables(&self) -> &FactTables {
        &self.tables
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `date_iso` (`YYYY-MM-DD`) to a key -> value mapping.
    pub async fn resolve(&self, date_iso: &str) -> FactMap {
        self.resolve_detailed(date_iso).await.into_map()
    }

    /// Resolve `date_iso` and keep the source of every value.
    pub async fn resolve_detailed(&self, date_iso: &str) -> ResolvedFacts {
        let date = match TargetDate::parse(date_iso) {
            Ok(date) => Some(date),
            Err(e) => {
                debug!("{}; resolving with current values only", e);
                None
            }
        };

        let historical = date
            .map(|date| self.historical_for(date))
            .unwrap_or_default();

        let (current, live) = self.fetch_current().await;

        let mut facts: HashMap<FactKey, ResolvedFact> = current
            .into_iter()
            .map(|(key, value)| {
                let fact = ResolvedFact {
                    value,
                    source: FactSource::Current,
                };
                (key, fact)
            })
            .collect();
        facts.extend(historical);

        ResolvedFacts { date, live, facts }
    }

    /// Historical values for `date_iso` without consulting the live provider.
    ///
    /// Returns an empty map for malformed dates.
    pub fn historical_facts(&self, date_iso: &str) -> FactMap {
        match TargetDate::parse(date_iso) {
            Ok(date) => self
                .historical_for(date)
                .into_iter()
                .map(|(key, fact)| (key, fact.value))
                .collect(),
            Err(_) => FactMap::new(),
        }
    }

    fn historical_for(&self, date: TargetDate) -> HashMap<FactKey, ResolvedFact> {
        let year = date.year();

        let (mut facts, granularity) = if year >= MONTHLY_FIRST_YEAR {
            let values = self.tables.monthly.values_at(date.year_month());
            (collect_facts(values, FactSource::Monthly), "monthly")
        } else {
            let values = self.tables.yearly.values_at(year);
            (collect_facts(values, FactSource::Yearly), "yearly")
        };
        let base_count = facts.len();

        let mut extended_count = 0;
        if (EXTENDED_FIRST_YEAR..=EXTENDED_LAST_YEAR).contains(&year) {
            let extended = self.tables.extended.values_for_year(year);
            extended_count = extended.len();
            facts.extend(extended.into_iter().map(|(key, value)| {
                let fact = ResolvedFact {
                    value,
                    source: FactSource::Extended,
                };
                (key, fact)
            }));
        }

        debug!(
            "Historical facts for {}: {} from {} table, {} from extended table",
            date, base_count, granularity, extended_count
        );

        facts
    }

    async fn fetch_current(&self) -> (FactMap, LiveFetchStatus) {
        let provider = self.provider.id().to_string();
        let timeout = self.config.live_fetch_timeout;

        match tokio::time::timeout(timeout, self.provider.fetch_current()).await {
            Ok(Ok(snapshot)) => {
                let keys = snapshot.len();
                debug!("Current snapshot from {}: {} keys", provider, keys);
                (snapshot, LiveFetchStatus::Fetched { provider, keys })
            }
            Ok(Err(e)) => {
                warn!(
                    "Current snapshot from {} failed, continuing without it: {}",
                    provider, e
                );
                let status = LiveFetchStatus::Failed {
                    provider,
                    message: e.to_string(),
                };
                (FactMap::new(), status)
            }
            Err(_) => {
                warn!(
                    "Current snapshot from {} timed out after {:?}, continuing without it",
                    provider, timeout
                );
                let status = LiveFetchStatus::TimedOut {
                    provider,
                    after: timeout,
                };
                (FactMap::new(), status)
            }
        }
    }
}

fn collect_facts<'a>(
    values: impl Iterator<Item = (&'a FactKey, &'a FactValue)>,
    source: FactSource,
) -> HashMap<FactKey, ResolvedFact> {
    values
        .map(|(key, value)| {
            let fact = ResolvedFact {
                value: Arc::clone(value),
                source,
            };
            (key.clone(), fact)
        })
        .collect()
}
