use std::env;
use std::time::Duration;

use business::application::cart::client::SessionLimits;

/// Limits of the in-memory visitor cart states
#[derive(Debug, Clone, Copy)]
pub struct CartConfig {
    pub limits: SessionLimits,
}

impl CartConfig {
    /// Load cart state limits from environment variables
    ///
    /// Environment variables:
    /// - CART_MAX_SESSIONS: visitors kept in memory (default: 10000)
    /// - CART_SESSION_IDLE_SECS: idle time before a visitor may be evicted
    ///   (default: 1800)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CART_MAX_SESSIONS").ok(),
            env::var("CART_SESSION_IDLE_SECS").ok(),
        )
    }

    fn from_values(max_sessions: Option<String>, idle_secs: Option<String>) -> Self {
        let defaults = SessionLimits::default();
        Self {
            limits: SessionLimits {
                max_sessions: max_sessions
                    .and_then(|v| v.trim().parse().ok())
                    .filter(|v| *v > 0)
                    .unwrap_or(defaults.max_sessions),
                idle_ttl: idle_secs
                    .and_then(|v| v.trim().parse().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.idle_ttl),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = CartConfig::from_values(None, None);

        assert_eq!(config.limits.max_sessions, 10_000);
        assert_eq!(config.limits.idle_ttl, Duration::from_secs(1800));
    }

    #[test]
    fn should_read_limits_and_ignore_zero_capacity() {
        let config = CartConfig::from_values(Some("0".to_string()), Some(" 60 ".to_string()));

        assert_eq!(config.limits.max_sessions, 10_000);
        assert_eq!(config.limits.idle_ttl, Duration::from_secs(60));
    }
}
