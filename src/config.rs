//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Root directory generated projects are written under
    pub sites_root: String,
    /// TTL in seconds for cached model completions
    pub cache_ttl: u64,
    /// Background sweep task interval in seconds
    pub cleanup_interval: u64,
    /// Maximum requests per client within the rate window
    pub rate_limit: usize,
    /// Rate window length in seconds
    pub rate_window: u64,
    /// API key for the upstream completion endpoint
    pub openai_api_key: String,
    /// Base URL of the upstream completion endpoint
    pub openai_api_base: String,
    /// Model identifier sent to the upstream endpoint
    pub openai_model: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SITES_ROOT` - Output directory for generated projects (default: generated-sites)
    /// - `CACHE_TTL` - Completion cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `RATE_LIMIT` - Requests allowed per client per window (default: 100)
    /// - `RATE_WINDOW` - Rate window in seconds (default: 900)
    /// - `OPENAI_API_KEY` - Upstream API key (default: empty)
    /// - `OPENAI_API_BASE` - Upstream API base URL (default: https://api.openai.com/v1)
    /// - `OPENAI_MODEL` - Upstream model identifier (default: gpt-4)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            sites_root: env::var("SITES_ROOT").unwrap_or_else(|_| "generated-sites".to_string()),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            rate_limit: env::var("RATE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            rate_window: env::var("RATE_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            sites_root: "generated-sites".to_string(),
            cache_ttl: 3600,
            cleanup_interval: 60,
            rate_limit: 100,
            rate_window: 900,
            openai_api_key: String::new(),
            openai_api_base: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.sites_root, "generated-sites");
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.rate_limit, 100);
        assert_eq!(config.rate_window, 900);
        assert_eq!(config.openai_model, "gpt-4");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("SITES_ROOT");
        env::remove_var("CACHE_TTL");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("RATE_LIMIT");
        env::remove_var("RATE_WINDOW");
        env::remove_var("OPENAI_API_KEY");
        env::remove_var("OPENAI_API_BASE");
        env::remove_var("OPENAI_MODEL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.sites_root, "generated-sites");
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.rate_limit, 100);
        assert_eq!(config.openai_api_base, "https://api.openai.com/v1");
    }
}
