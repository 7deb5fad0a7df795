// ABOUTME: Exponential backoff with jitter for background token refresh.
// ABOUTME: Has no overall deadline; the caller stops retrying by cancelling.

use std::time::Duration;

use rand::Rng;
use serde::Deserialize;

/// Tuning for [`ExponentialBackoff`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackoffConfig {
    /// Delay before the first retry, before jitter.
    #[serde(default = "default_initial_interval_ms")]
    pub initial_interval_ms: u64,

    /// Growth factor applied after every retry.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// Jitter as a fraction of the current interval (0.5 = ±50%).
    #[serde(default = "default_randomization_factor")]
    pub randomization_factor: f64,

    /// Upper bound on the un-jittered interval.
    #[serde(default = "default_max_interval_secs")]
    pub max_interval_secs: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: default_initial_interval_ms(),
            multiplier: default_multiplier(),
            randomization_factor: default_randomization_factor(),
            max_interval_secs: default_max_interval_secs(),
        }
    }
}

fn default_initial_interval_ms() -> u64 {
    500
}

fn default_multiplier() -> f64 {
    1.5
}

fn default_randomization_factor() -> f64 {
    0.5
}

fn default_max_interval_secs() -> u64 {
    60
}

impl BackoffConfig {
    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }

    pub fn max_interval(&self) -> Duration {
        Duration::from_secs(self.max_interval_secs)
    }

    /// Check that the settings describe a growing, bounded backoff.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_interval_ms == 0 {
            return Err("backoff.initial_interval_ms must be greater than 0".into());
        }
        if !(self.multiplier >= 1.0 && self.multiplier.is_finite()) {
            return Err("backoff.multiplier must be a finite number >= 1.0".into());
        }
        if !(0.0..=1.0).contains(&self.randomization_factor) {
            return Err("backoff.randomization_factor must be between 0.0 and 1.0".into());
        }
        if self.max_interval() < self.initial_interval() {
            return Err("backoff.max_interval_secs must not be below the initial interval".into());
        }
        Ok(())
    }
}

/// Stateful delay generator: each call to [`next_delay`](Self::next_delay)
/// returns a jittered delay and grows the interval for the next one.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    config: BackoffConfig,
    current: Duration,
}

impl ExponentialBackoff {
    pub fn new(config: BackoffConfig) -> Self {
        let current = config.initial_interval();
        Self { config, current }
    }

    /// Go back to the initial interval.
    pub fn reset(&mut self) {
        self.current = self.config.initial_interval();
    }

    /// The un-jittered interval the next delay is drawn around.
    pub fn current_interval(&self) -> Duration {
        self.current
    }

    pub fn next_delay(&mut self) -> Duration {
        let delay = randomize(
            self.current,
            self.config.randomization_factor,
            rand::thread_rng().gen::<f64>(),
        );

        // Unvalidated configs may carry NaN or huge values; anything that
        // leaves the representable range settles on the cap.
        let max = self.config.max_interval();
        let multiplier = self.config.multiplier.max(1.0);
        self.current = Duration::try_from_secs_f64(self.current.as_secs_f64() * multiplier)
            .map_or(max, |grown| grown.min(max));

        delay
    }
}

/// Pick a point in `[interval * (1 - factor), interval * (1 + factor)]`.
/// `random` is a uniform sample from `[0, 1)`. Falls back to `interval`
/// when the result is not a valid duration.
fn randomize(interval: Duration, factor: f64, random: f64) -> Duration {
    let factor = if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    };
    let base = interval.as_secs_f64();
    let delta = factor * base;
    let low = base - delta;
    let high = base + delta;
    Duration::try_from_secs_f64(low + random * (high - low)).unwrap_or(interval)
}
