use std::time::Duration;

pub struct Config {
    pub snapshot_url: Option<String>,
    pub live_timeout: Duration,
    pub http_timeout: Duration,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let snapshot_url = std::env::var("KEEPSAKE_SNAPSHOT_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let live_timeout_ms = millis_var("KEEPSAKE_LIVE_TIMEOUT_MS", 5_000);
        let http_timeout_ms = millis_var("KEEPSAKE_HTTP_TIMEOUT_MS", 10_000);
        let log_format =
            std::env::var("KEEPSAKE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Self {
            snapshot_url,
            live_timeout: Duration::from_millis(live_timeout_ms),
            http_timeout: Duration::from_millis(http_timeout_ms),
            log_format,
        }
    }
}

fn millis_var(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_var_falls_back_on_missing_or_bad_values() {
        std::env::remove_var("KEEPSAKE_TEST_MISSING_MS");
        assert_eq!(millis_var("KEEPSAKE_TEST_MISSING_MS", 42), 42);

        std::env::set_var("KEEPSAKE_TEST_BAD_MS", "soon");
        assert_eq!(millis_var("KEEPSAKE_TEST_BAD_MS", 42), 42);

        std::env::set_var("KEEPSAKE_TEST_GOOD_MS", " 750 ");
        assert_eq!(millis_var("KEEPSAKE_TEST_GOOD_MS", 42), 750);
    }
}
