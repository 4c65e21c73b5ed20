use std::{env, str::FromStr, time::Duration};

use plainui_core::pagination::DEFAULT_MAX_VISIBLE;

const DEFAULT_TOTAL_PAGES: i64 = 20;
const DEFAULT_INITIAL_PAGE: i64 = 6;
const DEFAULT_API_MAX_VISIBLE_LIMIT: i64 = 100;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of pages in the demo collection (default: 20)
    pub total_pages: i64,
    /// Page-number slots shown by the demo pagination bar (default: 5)
    pub max_visible: i64,
    /// Page shown when the request does not name one (default: 6)
    pub initial_page: i64,
    /// Largest `max_visible` accepted by the JSON API (default: 100)
    pub api_max_visible_limit: i64,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PAGINATION_TOTAL_PAGES` - Pages in the demo collection (default: 20)
    /// - `PAGINATION_MAX_VISIBLE` - Visible page slots (default: 5)
    /// - `PAGINATION_INITIAL_PAGE` - Page shown without `?page=` (default: 6)
    /// - `API_MAX_VISIBLE_LIMIT` - Upper bound for `max_visible` on the API (default: 100)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            total_pages: parse_env("PAGINATION_TOTAL_PAGES", DEFAULT_TOTAL_PAGES),
            max_visible: parse_env("PAGINATION_MAX_VISIBLE", DEFAULT_MAX_VISIBLE),
            initial_page: parse_env("PAGINATION_INITIAL_PAGE", DEFAULT_INITIAL_PAGE),
            api_max_visible_limit: parse_env(
                "API_MAX_VISIBLE_LIMIT",
                DEFAULT_API_MAX_VISIBLE_LIMIT,
            ),
            request_timeout_seconds: parse_env(
                "REQUEST_TIMEOUT_SECONDS",
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            ),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_pages: DEFAULT_TOTAL_PAGES,
            max_visible: DEFAULT_MAX_VISIBLE,
            initial_page: DEFAULT_INITIAL_PAGE,
            api_max_visible_limit: DEFAULT_API_MAX_VISIBLE_LIMIT,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 30,
            ..Config::default()
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.total_pages, 20);
        assert_eq!(config.max_visible, DEFAULT_MAX_VISIBLE);
        assert_eq!(config.max_visible, 5);
        assert_eq!(config.initial_page, 6);
        assert_eq!(config.api_max_visible_limit, 100);
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_parse_env_falls_back_on_missing_or_invalid() {
        assert_eq!(parse_env("PLAINUI_TEST_UNSET_VARIABLE", 7_i64), 7);

        env::set_var("PLAINUI_TEST_INVALID_NUMBER", "seven");
        assert_eq!(parse_env("PLAINUI_TEST_INVALID_NUMBER", 7_i64), 7);

        env::set_var("PLAINUI_TEST_VALID_NUMBER", " 42 ");
        assert_eq!(parse_env("PLAINUI_TEST_VALID_NUMBER", 7_i64), 42);
    }
}
