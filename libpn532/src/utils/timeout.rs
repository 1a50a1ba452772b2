//! Delay helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the default settle delay
//! and provide a small conversion helper so tests and code can express
//! delays in milliseconds clearly.

use std::time::Duration;

use crate::constants::SETTLE_DELAY_MS;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default settle delay inserted between writing a command frame and
/// polling for status.
pub fn default_settle_delay() -> Duration {
    ms(SETTLE_DELAY_MS)
}
