use std::env::var;
use std::time::Duration;

use dotenvy::dotenv;

/// Application configuration with environment variable overrides
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Request timeout in seconds
    /// Env: REQUEST_TIMEOUT_SECS (default: 30)
    pub request_timeout: Duration,

    /// Server port
    /// Env: PORT (default: 5000)
    pub port: u16,

    /// Base URL every lichess endpoint is resolved against
    /// Env: LICHESS_BASE_URL (default: "https://lichess.org")
    pub lichess_base_url: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let _ = dotenv(); //for local runs mostly
        let defaults = Self::default();
        Self {
            request_timeout: Duration::from_secs(env_or_default(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )),
            port: env_or_default("PORT", defaults.port),
            lichess_base_url: env_or_default_string("LICHESS_BASE_URL", &defaults.lichess_base_url),
        }
    }
}

impl Default for Config {
    /// All default values, without reading the environment
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            port: 5000,
            lichess_base_url: lichess_client::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Parse environment variable or return default value
fn env_or_default<T: std::str::FromStr>(key: &str, default: T) -> T {
    var(key)
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or(default)
}

/// Parse environment variable string or return default value
fn env_or_default_string(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|_| default.to_string())
}
