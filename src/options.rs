//! Bounded wait configuration.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use safe_automation::WaitOptions;
//!
//! let wait = WaitOptions::new()
//!     .with_timeout(Duration::from_secs(3))
//!     .with_poll_interval(Duration::from_millis(100));
//!
//! assert_eq!(wait.timeout_ms(), 3000);
//! ```

use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Default wait bound (10 seconds).
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default delay between condition checks (500 ms).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

// ============================================================================
// WaitOptions
// ============================================================================

/// How long a bounded wait may block and how often it re-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Upper bound on the wait.
    pub timeout: Duration,

    /// Delay between condition checks.
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl WaitOptions {
    /// Creates options with the default bound and poll interval.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Creates options with the given bound and the default poll interval.
    #[inline]
    #[must_use]
    pub const fn timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl WaitOptions {
    /// Sets the wait bound.
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the poll interval. Zero is raised to one millisecond.
    #[inline]
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Returns the bound in whole milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = WaitOptions::default();
        assert_eq!(opts.timeout, Duration::from_secs(10));
        assert_eq!(opts.poll_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_builder() {
        let opts = WaitOptions::timeout(Duration::from_millis(250))
            .with_poll_interval(Duration::from_millis(25));
        assert_eq!(opts.timeout_ms(), 250);
        assert_eq!(opts.poll_interval, Duration::from_millis(25));
    }

    #[test]
    fn test_zero_poll_interval_is_raised() {
        let opts = WaitOptions::new().with_poll_interval(Duration::ZERO);
        assert_eq!(opts.poll_interval, Duration::from_millis(1));
    }
}
