//! Readiness polling policy.

use std::time::Duration;

/// Bounds on the remote-processing poll loop.
///
/// The remote service imposes no limit of its own; without a bound here a
/// stuck remote job would hang the request forever.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Sleep between readiness checks
    pub interval: Duration,
    /// Total poll attempts before the request times out
    pub max_attempts: u32,
    /// Consecutive transient poll errors tolerated before giving up
    pub max_transient_errors: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: 300, // 5 minute ceiling at the default interval
            max_transient_errors: 3,
        }
    }
}

impl PollPolicy {
    /// Create policy from environment variables.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            interval: Duration::from_millis(
                std::env::var("POLL_INTERVAL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(default.interval.as_millis() as u64),
            ),
            max_attempts: std::env::var("POLL_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.max_attempts),
            max_transient_errors: std::env::var("POLL_MAX_TRANSIENT_ERRORS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.max_transient_errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(1));
        assert_eq!(policy.max_attempts, 300);
        assert_eq!(policy.max_transient_errors, 3);
    }
}
