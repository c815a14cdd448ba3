//! [`Clock`] backed by `embassy-time`
//!
//! Requires an embassy time driver to be linked into the final binary.

use embassy_time::{block_for, Duration, Instant};

use crate::clock::Clock;

/// Clock reading the global embassy time driver
///
/// Delays use [`block_for`], which spins on the driver's tick counter
/// rather than awaiting a timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    /// Create a clock handle
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }

    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
