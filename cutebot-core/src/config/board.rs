//! Board configuration types
//!
//! These types define the bus address, protocol timing, sonar wiring and
//! track sensor setup for one robot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::gpio::EdgePin;
use crate::track::{Polarity, SensorCountMask};

/// I2C address of the onboard controller
pub const DEFAULT_I2C_ADDRESS: u8 = 0x10;

/// Busy-wait after every frame write (µs)
pub const DEFAULT_SETTLE_US: u32 = 1_000;

/// Interval between status polls while waiting for an ack (ms)
pub const DEFAULT_ACK_POLL_MS: u32 = 10;

/// Pause after an ack wait, whatever ended it (ms)
pub const DEFAULT_ACK_SETTLE_MS: u32 = 500;

/// Echo pulse limit; roughly 250 cm of round trip (µs)
pub const DEFAULT_ECHO_TIMEOUT_US: u32 = 7_288;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input is not valid TOML or has wrongly typed fields
    Parse,
    /// Address does not fit in 7 bits
    InvalidAddress,
    /// A timeout of zero would never let a measurement complete
    InvalidTimeout,
}

/// I2C bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusConfig {
    /// 7-bit device address
    pub address: u8,
    /// Busy-wait after each frame write, in µs
    pub settle_us: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_I2C_ADDRESS,
            settle_us: DEFAULT_SETTLE_US,
        }
    }
}

/// Ack polling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AckConfig {
    /// Pause between status polls, in ms
    pub poll_interval_ms: u32,
    /// Pause after the wait ends, in ms
    pub settle_ms: u32,
}

impl Default for AckConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_ACK_POLL_MS,
            settle_ms: DEFAULT_ACK_SETTLE_MS,
        }
    }
}

/// Ultrasonic sensor wiring and timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SonarConfig {
    /// Trigger output line
    pub trigger_pin: EdgePin,
    /// Echo input line
    pub echo_pin: EdgePin,
    /// Longest echo pulse accepted, in µs
    pub echo_timeout_us: u32,
    /// Longest wait for the echo to start, in µs
    ///
    /// `None` waits forever, which hangs if the sensor is unplugged.
    pub echo_start_timeout_us: Option<u32>,
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self {
            trigger_pin: EdgePin::P8,
            echo_pin: EdgePin::P12,
            echo_timeout_us: DEFAULT_ECHO_TIMEOUT_US,
            echo_start_timeout_us: None,
        }
    }
}

/// Track sensor setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackConfig {
    /// Line colour relative to the floor
    pub polarity: Polarity,
    /// Fitted sensors
    pub mask: SensorCountMask,
}

/// Complete robot configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RobotConfig {
    pub bus: BusConfig,
    pub ack: AckConfig,
    pub sonar: SonarConfig,
    pub track: TrackConfig,
}

impl RobotConfig {
    /// Check values the driver cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bus.address > 0x7F {
            return Err(ConfigError::InvalidAddress);
        }
        if self.sonar.echo_timeout_us == 0 || self.sonar.echo_start_timeout_us == Some(0) {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}
