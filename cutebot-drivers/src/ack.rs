//! Motion-complete acknowledgement
//!
//! After a closed-loop move the controller raises a status flag. The host
//! polls for it with a status query followed by a one-byte read; any
//! nonzero byte means done.

use cutebot_core::config::AckConfig;
use cutebot_hal::{Clock, I2cBus};
use cutebot_protocol::Command;

use crate::bus::CutebotBus;
use crate::error::DriverError;

/// Blocking poller for the controller's status flag
#[derive(Debug, Clone, Copy, Default)]
pub struct AckWaiter {
    config: AckConfig,
}

impl AckWaiter {
    /// Create a waiter with the given poll timing
    pub fn new(config: AckConfig) -> Self {
        Self { config }
    }

    /// Get the poll timing
    pub fn config(&self) -> &AckConfig {
        &self.config
    }

    /// Block until the controller acks or `timeout_ms` elapses
    ///
    /// Polling continues through bus errors so the blocking time matches
    /// the infallible [`AckWaiter::wait`]. Ends with the settle pause on
    /// every path. Returns the last bus error seen if the ack never came,
    /// otherwise [`DriverError::AckTimeout`].
    pub fn try_wait<I2C, C>(
        &self,
        bus: &mut CutebotBus<I2C, C>,
        timeout_ms: u32,
    ) -> Result<(), DriverError>
    where
        I2C: I2cBus,
        C: Clock,
    {
        let start = bus.clock().now_ms();
        let mut bus_error = None;

        let outcome = loop {
            // The status byte is read even if the query write failed
            if let Err(e) = bus.try_command(Command::StatusQuery) {
                bus_error = Some(e);
            }

            match bus.try_read_byte() {
                Ok(0) => {}
                Ok(_) => break Ok(()),
                Err(e) => bus_error = Some(e),
            }

            if bus.clock().now_ms().saturating_sub(start) >= u64::from(timeout_ms) {
                break Err(bus_error.unwrap_or(DriverError::AckTimeout));
            }

            bus.clock_mut().pause_ms(self.config.poll_interval_ms);
        };

        bus.clock_mut().pause_ms(self.config.settle_ms);

        #[cfg(feature = "defmt")]
        match outcome {
            Ok(()) => defmt::debug!("ack received"),
            Err(e) => defmt::warn!("no ack within {=u32} ms: {}", timeout_ms, e),
        }

        outcome
    }

    /// Block until the controller acks or `timeout_ms` elapses
    ///
    /// A timeout is not distinguished from an ack.
    pub fn wait<I2C, C>(&self, bus: &mut CutebotBus<I2C, C>, timeout_ms: u32)
    where
        I2C: I2cBus,
        C: Clock,
    {
        let _ = self.try_wait(bus, timeout_ms);
    }
}
