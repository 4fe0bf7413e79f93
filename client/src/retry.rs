use std::time::Duration;

use rand;
use tracing::debug;

/// Backoff settings for refetching a transaction from the indexer.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Delay before the first retry; doubles on every subsequent one.
    pub base_interval: Duration,
    /// Upper bound for the computed delay.
    pub max_interval: Duration,
    /// Attempts per transaction before the fetch is abandoned.
    /// `None` retries forever.
    pub max_attempts: Option<u32>,
    /// Spread delays by up to 25% so clients recovering from an indexer
    /// outage don't return in lockstep.
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_secs(5),
            max_interval: Duration::from_secs(60),
            max_attempts: Some(10),
            use_jitter: true,
        }
    }
}

/// Tracks attempts for one transaction and hands out backoff delays.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
    attempt: u32,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config, attempt: 0 }
    }

    /// Failed attempts registered so far.
    pub fn attempts(&self) -> u32 {
        self.attempt
    }

    /// Start over, typically for the next transaction.
    pub fn reset(&mut self) {
        self.attempt = 0;
    }

    /// Registers a failed attempt. Returns the delay to sleep before the
    /// next try, or `None` once the attempt budget is spent.
    pub fn next_delay(&mut self) -> Option<Duration> {
        self.attempt += 1;

        if let Some(max) = self.config.max_attempts {
            if self.attempt >= max {
                return None;
            }
        }

        // Exponent is capped so the shift cannot overflow; max_interval
        // clamps long before that anyway.
        let exponent = self.attempt.saturating_sub(1).min(10);
        let mut delay = self
            .config
            .base_interval
            .saturating_mul(1 << exponent)
            .min(self.config.max_interval);

        if self.config.use_jitter {
            delay += jitter(delay);
        }

        debug!(
            "retry {}/{:?} scheduled in {:?}",
            self.attempt, self.config.max_attempts, delay
        );

        Some(delay)
    }
}

fn jitter(delay: Duration) -> Duration {
    let spread = delay.as_millis() as u64 / 4;
    if spread == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::random::<u64>() % spread)
}
