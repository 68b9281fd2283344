//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before the server binds.
//!
//! ## Variables
//!
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)
//! - `RESOLVE_TIMEOUT_MS` - upper bound on one DNS resolution during URL
//!   validation, in milliseconds (default: 3000, min: 100)

use std::env;

/// Floor for `RESOLVE_TIMEOUT_MS`.
const MIN_RESOLVE_TIMEOUT_MS: u64 = 100;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound for the host-resolution call; a timeout is treated the
    /// same as a failed resolution.
    pub resolve_timeout_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so loading never fails; out-of-range
    /// timeouts are clamped to the minimum.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let resolve_timeout_ms = env::var("RESOLVE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000)
            .max(MIN_RESOLVE_TIMEOUT_MS);

        Self {
            listen_addr,
            log_level,
            log_format,
            resolve_timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so env mutation cannot race with a parallel sibling.
    #[test]
    fn test_from_env_defaults_overrides_and_clamp() {
        for key in ["LISTEN", "LOG_FORMAT", "RESOLVE_TIMEOUT_MS"] {
            unsafe { env::remove_var(key) };
        }

        let config = Config::from_env();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.resolve_timeout_ms, 3000);

        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("RESOLVE_TIMEOUT_MS", "500");
        }
        let config = Config::from_env();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.resolve_timeout_ms, 500);

        unsafe { env::set_var("RESOLVE_TIMEOUT_MS", "5") };
        let config = Config::from_env();
        assert_eq!(config.resolve_timeout_ms, MIN_RESOLVE_TIMEOUT_MS);

        unsafe { env::set_var("RESOLVE_TIMEOUT_MS", "not-a-number") };
        let config = Config::from_env();
        assert_eq!(config.resolve_timeout_ms, 3000);

        for key in ["LISTEN", "LOG_FORMAT", "RESOLVE_TIMEOUT_MS"] {
            unsafe { env::remove_var(key) };
        }
    }
}
