//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for runtime behavior.
//!
//! ## Environment Variables
//!
//! ### `CHAINROUTE_HTTP_TIMEOUT_MS`
//!
//! Request timeout for the blocking JSON client, in milliseconds.
//! Default: `30000` (30 seconds). Unparseable values fall back to the
//! default.
//!
//! ### `CHAINROUTE_VALIDATE_RESPONSES`
//!
//! Whether [`crate::validation::check_response`] actually checks the response
//! body against the declared schema. Enabled by default; set to `off`, `0`
//! or `false` to skip the check (useful when a schema is known to lag behind
//! the handler during development).
//!
//! ## Usage
//!
//! ```
//! use chainroute::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("client timeout: {:?}", config.http_timeout);
//! ```

use std::env;
use std::time::Duration;

const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Timeout applied to every client request (default: 30s)
    pub http_timeout: Duration,
    /// Whether response-schema checks run (default: true)
    pub validate_responses: bool,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        RuntimeConfig {
            http_timeout: Duration::from_millis(parse_millis(
                env::var("CHAINROUTE_HTTP_TIMEOUT_MS").ok().as_deref(),
            )),
            validate_responses: parse_toggle(
                env::var("CHAINROUTE_VALIDATE_RESPONSES").ok().as_deref(),
            ),
        }
    }
}

fn parse_millis(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_MS)
}

fn parse_toggle(raw: Option<&str>) -> bool {
    !matches!(raw.map(str::trim), Some("off" | "0" | "false"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis(None), DEFAULT_HTTP_TIMEOUT_MS);
        assert_eq!(parse_millis(Some("2500")), 2500);
        assert_eq!(parse_millis(Some(" 100 ")), 100);
        assert_eq!(parse_millis(Some("not-a-number")), DEFAULT_HTTP_TIMEOUT_MS);
    }

    #[test]
    fn test_parse_toggle() {
        assert!(parse_toggle(None));
        assert!(parse_toggle(Some("on")));
        assert!(parse_toggle(Some("1")));
        assert!(!parse_toggle(Some("off")));
        assert!(!parse_toggle(Some("0")));
        assert!(!parse_toggle(Some("false")));
    }
}
