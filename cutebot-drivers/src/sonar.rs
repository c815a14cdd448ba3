//! Ultrasonic distance sensor
//!
//! The sensor's trigger and echo lines are wired straight to GPIO rather
//! than through the controller. The echo pulse is timed with a plain
//! polling loop against [`Clock`]: interrupt- or capture-based pulse
//! measurement picks up noise from the motor driver while the wheels run,
//! and this loop does not.
//!
//! ```text
//! trigger  ‾‾|__2µs__|‾‾10µs‾‾|________________________________
//! echo     ___________________________|‾‾‾‾‾ pulse ‾‾‾‾‾|______
//!                                     t1                t2
//! ```

use cutebot_core::config::SonarConfig;
use cutebot_hal::{Clock, InputPin, OutputPin};

use crate::error::DriverError;

/// Reading returned when no echo ends within the timeout
pub const OUT_OF_RANGE_CM: u16 = 999;

/// Trigger line low time before the pulse (µs)
const TRIGGER_SETUP_US: u32 = 2;

/// Trigger pulse width (µs)
const TRIGGER_PULSE_US: u32 = 10;

/// Convert an echo pulse width to centimeters
///
/// Sound covers 0.0343 cm/µs and the pulse spans the round trip.
/// Saturates at `u16::MAX`.
pub fn pulse_to_cm(pulse_us: u64) -> u16 {
    let cm = pulse_us.saturating_mul(343) / 20_000;
    cm.min(u64::from(u16::MAX)) as u16
}

/// HC-SR04 style ultrasonic ranger
pub struct DistanceSensor<TRIG, ECHO> {
    trigger: TRIG,
    echo: ECHO,
    config: SonarConfig,
}

impl<TRIG, ECHO> DistanceSensor<TRIG, ECHO>
where
    TRIG: OutputPin,
    ECHO: InputPin,
{
    /// Create a sensor on the given lines
    pub fn new(trigger: TRIG, echo: ECHO, config: SonarConfig) -> Self {
        Self {
            trigger,
            echo,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SonarConfig {
        &self.config
    }

    /// Release the trigger and echo lines
    pub fn release(self) -> (TRIG, ECHO) {
        (self.trigger, self.echo)
    }

    /// Measure distance in whole centimeters
    ///
    /// Busy-waits for the whole measurement. Without
    /// `echo_start_timeout_us` the wait for the echo to start is unbounded.
    pub fn try_read_distance_cm<C: Clock>(&mut self, clock: &mut C) -> Result<u16, DriverError> {
        self.trigger.set_low();
        clock.delay_us(TRIGGER_SETUP_US);
        self.trigger.set_high();
        clock.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low();

        let wait_start = clock.now_us();
        while self.echo.is_low() {
            let waited = clock.now_us().wrapping_sub(wait_start);
            if let Some(limit) = self.config.echo_start_timeout_us {
                if waited > u64::from(limit) {
                    return Err(DriverError::EchoNeverStarted);
                }
            }
        }

        let t1 = clock.now_us();
        while self.echo.is_high() {
            if clock.now_us().wrapping_sub(t1) > u64::from(self.config.echo_timeout_us) {
                return Err(DriverError::EchoTimeout);
            }
        }
        let t2 = clock.now_us();

        Ok(pulse_to_cm(t2.wrapping_sub(t1)))
    }

    /// Measure distance in whole centimeters, [`OUT_OF_RANGE_CM`] on failure
    pub fn read_distance_cm<C: Clock>(&mut self, clock: &mut C) -> u16 {
        match self.try_read_distance_cm(clock) {
            Ok(cm) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("distance {=u16} cm", cm);
                cm
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("distance unavailable: {}", _e);
                OUT_OF_RANGE_CM
            }
        }
    }
}
