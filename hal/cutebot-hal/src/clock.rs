//! Monotonic time source
//!
//! Every timing loop in the driver reads time through [`Clock`] so that
//! host tests can substitute a simulated clock and run without real delay.

/// Monotonic microsecond clock with busy-wait delays
pub trait Clock {
    /// Microseconds since an arbitrary, fixed epoch
    ///
    /// Must never go backwards.
    fn now_us(&self) -> u64;

    /// Milliseconds since the same epoch as [`Clock::now_us`]
    fn now_ms(&self) -> u64 {
        self.now_us() / 1_000
    }

    /// Spin until `us` microseconds have elapsed
    ///
    /// Never yields. Used for trigger pulses and bus settle times where
    /// handing control to another task would skew the timing.
    fn delay_us(&mut self, us: u32) {
        let start = self.now_us();
        while self.now_us().wrapping_sub(start) < u64::from(us) {}
    }

    /// Spin until `ms` milliseconds have elapsed
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }

    /// Wait `ms` milliseconds between polls
    ///
    /// Implementations running under a cooperative scheduler may yield
    /// here. The default spins like [`Clock::delay_ms`].
    fn pause_ms(&mut self, ms: u32) {
        self.delay_ms(ms);
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }

    fn pause_ms(&mut self, ms: u32) {
        (**self).pause_ms(ms)
    }
}
