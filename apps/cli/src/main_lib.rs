use std::sync::Arc;

use keepsake_facts::{
    CurrentSnapshotProvider, HistoricalFactResolver, ResolvedFacts, ResolverConfig,
    SheetSnapshotProvider, StaticSnapshotProvider,
};
use serde::Serialize;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_resolver(config: &Config) -> HistoricalFactResolver {
    let provider: Arc<dyn CurrentSnapshotProvider> = match &config.snapshot_url {
        Some(url) => {
            tracing::info!("Using live snapshot from {}", url);
            Arc::new(SheetSnapshotProvider::with_timeout(
                url.clone(),
                config.http_timeout,
            ))
        }
        None => {
            tracing::info!("KEEPSAKE_SNAPSHOT_URL not set; resolving without current values");
            Arc::new(StaticSnapshotProvider::empty())
        }
    };

    HistoricalFactResolver::new(provider).with_config(ResolverConfig {
        live_fetch_timeout: config.live_timeout,
    })
}

/// One printed result. Keeps the caller's input so malformed dates are visible.
#[derive(Serialize)]
pub struct DateReport<'a> {
    pub input: &'a str,
    #[serde(flatten)]
    pub resolved: ResolvedFacts,
}

pub async fn resolve_all<'a>(
    resolver: &HistoricalFactResolver,
    dates: &'a [String],
) -> Vec<DateReport<'a>> {
    let mut reports = Vec::with_capacity(dates.len());
    for input in dates {
        let resolved = resolver.resolve_detailed(input).await;
        reports.push(DateReport { input, resolved });
    }
    reports
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use keepsake_facts::{FactKey, FactSource, LiveFetchStatus};

    use super::*;

    fn offline_config() -> Config {
        Config {
            snapshot_url: None,
            live_timeout: Duration::from_millis(250),
            http_timeout: Duration::from_millis(250),
            log_format: "text".to_string(),
        }
    }

    #[tokio::test]
    async fn test_offline_resolver_uses_static_provider() {
        let resolver = build_resolver(&offline_config());
        assert_eq!(
            resolver.config().live_fetch_timeout,
            Duration::from_millis(250)
        );

        let dates = vec!["1971-11-15".to_string(), "someday".to_string()];
        let reports = resolve_all(&resolver, &dates).await;

        assert_eq!(reports.len(), 2);
        let first = &reports[0].resolved;
        assert_eq!(
            first.live,
            LiveFetchStatus::Fetched {
                provider: "STATIC".to_string(),
                keys: 0
            }
        );
        assert_eq!(first.source(&FactKey::President), Some(FactSource::Extended));
        assert!(reports[1].resolved.facts.is_empty());
    }

    #[tokio::test]
    async fn test_report_serializes_input_alongside_result() {
        let resolver = build_resolver(&offline_config());
        let dates = vec!["2020-03-15".to_string()];
        let reports = resolve_all(&resolver, &dates).await;

        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["input"], "2020-03-15");
        assert_eq!(json[0]["date"], "2020-03-15");
        assert_eq!(json[0]["facts"]["GALLON OF GASOLINE"]["value"], "$2.17");
        assert_eq!(json[0]["facts"]["GALLON OF GASOLINE"]["source"], "MONTHLY");
    }
}
