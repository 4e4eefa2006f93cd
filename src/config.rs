use std::time::Duration;

use tracing::warn;

pub const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";
/// Path of the CoinGecko simple price endpoint, relative to the base URL
pub const COINGECKO_SIMPLE_PRICE_ENDPOINT: &str = "/simple/price";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_CURRENCY: &str = "usd";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Read-only settings, resolved once at startup and shared through [AppState][crate::AppState]
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub coingecko_base_url: String,
    pub simple_price_endpoint: String,
    pub timeout_seconds: u64,
    pub default_currency: String,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            coingecko_base_url: DEFAULT_COINGECKO_BASE_URL.to_string(),
            simple_price_endpoint: COINGECKO_SIMPLE_PRICE_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            default_currency: DEFAULT_CURRENCY.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Builds the config from the process environment.
    /// Expects `.env` to have been loaded already, if there is one.
    pub fn init() -> Config {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    /// Missing or empty variables fall back to the compiled-in defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Config::default();

        let timeout_seconds = match var("COINGECKO_TIMEOUT_SECONDS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid COINGECKO_TIMEOUT_SECONDS={raw:?}");
                defaults.timeout_seconds
            }),
            None => defaults.timeout_seconds,
        };
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid PORT={raw:?}");
                defaults.port
            }),
            None => defaults.port,
        };

        Config {
            coingecko_base_url: var("COINGECKO_BASE_URL").unwrap_or(defaults.coingecko_base_url),
            simple_price_endpoint: defaults.simple_price_endpoint,
            timeout_seconds,
            default_currency: var("DEFAULT_CURRENCY")
                .map(|currency| currency.trim().to_lowercase())
                .unwrap_or(defaults.default_currency),
            host: var("HOST").unwrap_or(defaults.host),
            port,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// `{base_url}{endpoint}`, tolerating a trailing slash on the base URL
    pub fn simple_price_url(&self) -> String {
        format!(
            "{}{}",
            self.coingecko_base_url.trim_end_matches('/'),
            self.simple_price_endpoint
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.coingecko_base_url, "https://api.coingecko.com/api/v3");
        assert_eq!(config.simple_price_endpoint, "/simple/price");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.default_currency, "usd");
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_environment_overrides() {
        let config = config_from(&[
            ("COINGECKO_BASE_URL", "http://localhost:9999/api/v3"),
            ("COINGECKO_TIMEOUT_SECONDS", "3"),
            ("DEFAULT_CURRENCY", "EUR"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
        ]);
        assert_eq!(config.coingecko_base_url, "http://localhost:9999/api/v3");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.default_currency, "eur");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_empty_and_invalid_values_fall_back() {
        let config = config_from(&[
            ("COINGECKO_BASE_URL", ""),
            ("COINGECKO_TIMEOUT_SECONDS", "soon"),
            ("DEFAULT_CURRENCY", "  "),
            ("PORT", "99999"),
        ]);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_simple_price_url_trims_trailing_slash() {
        let config = Config {
            coingecko_base_url: "http://localhost:1234/api/v3/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.simple_price_url(),
            "http://localhost:1234/api/v3/simple/price"
        );
    }
}
