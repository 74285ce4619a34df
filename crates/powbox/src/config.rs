//! Delegate Configuration

use std::time::Duration;

/// PowBox delegate configuration
///
/// `performs_single` reports whether the provider computes all trytes
/// chunks in a single round-trip. Its correct value depends on how the
/// surrounding submission pipeline batches work, so it is an explicit
/// flag owned by the caller's batching contract rather than something
/// the delegate infers. Defaults to `false`.
#[derive(Debug, Clone)]
pub struct PowBoxConfig {
    /// API key sent as the `Authorization` header
    pub api_key: String,
    /// Cadence for checking job completion
    pub poll_interval: Duration,
    /// Whether the provider completes all chunks in one round-trip
    pub performs_single: bool,
}

impl PowBoxConfig {
    /// Default cadence for checking job completion
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

    /// Create a config with the default poll interval
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
            performs_single: false,
        }
    }

    /// Override the poll interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Override the single round-trip flag
    pub fn with_performs_single(mut self, performs_single: bool) -> Self {
        self.performs_single = performs_single;
        self
    }

    pub fn poll_interval_ms(&self) -> u128 {
        self.poll_interval.as_millis()
    }
}
