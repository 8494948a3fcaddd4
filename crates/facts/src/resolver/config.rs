use std::time::Duration;

/// Default upper bound on the live snapshot fetch.
pub const DEFAULT_LIVE_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables for [`HistoricalFactResolver`](super::HistoricalFactResolver).
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// How long to wait for the current snapshot before resolving without it.
    pub live_fetch_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            live_fetch_timeout: DEFAULT_LIVE_FETCH_TIMEOUT,
        }
    }
}
