// ABOUTME: Refresh scheduling policy for background token refreshers.
// ABOUTME: Computes when to wake up next from the last refresh time, the token lifetime and a lead window.

use std::time::Duration;

use serde::Deserialize;
use tokio::time::Instant;

use crate::backoff::BackoffConfig;

/// When and how a cache refreshes its credential in the background.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RefreshPolicy {
    /// How long before declared expiry to refresh.
    #[serde(default = "default_refresh_window_secs")]
    pub refresh_window_secs: u64,

    /// Lower bound on the sleep between refreshes.
    #[serde(default = "default_min_refresh_interval_secs")]
    pub min_refresh_interval_secs: u64,

    /// Retry behaviour when a refresh fails.
    #[serde(default)]
    pub backoff: BackoffConfig,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            refresh_window_secs: default_refresh_window_secs(),
            min_refresh_interval_secs: default_min_refresh_interval_secs(),
            backoff: BackoffConfig::default(),
        }
    }
}

fn default_refresh_window_secs() -> u64 {
    30 * 60
}

fn default_min_refresh_interval_secs() -> u64 {
    5
}

impl RefreshPolicy {
    pub fn refresh_window(&self) -> Duration {
        Duration::from_secs(self.refresh_window_secs)
    }

    pub fn min_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.min_refresh_interval_secs)
    }

    /// Delay until the next refresh: `last_refresh + ttl - window`, measured
    /// from `now` and never shorter than the minimum interval.
    pub fn next_wake_delay(&self, last_refresh: Instant, ttl: Duration, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(last_refresh);
        ttl.saturating_sub(self.refresh_window())
            .saturating_sub(elapsed)
            .max(self.min_refresh_interval())
    }

    /// Delay for a credential fetched right now.
    pub fn delay_for_fresh_token(&self, ttl: Duration) -> Duration {
        let now = Instant::now();
        self.next_wake_delay(now, ttl, now)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_refresh_interval_secs == 0 {
            return Err("min_refresh_interval_secs must be greater than 0".into());
        }
        self.backoff.validate()
    }
}
