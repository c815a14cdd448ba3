//! Cutebot Pro V2 driver
//!
//! This crate drives the robot's onboard controller over I2C and the
//! ultrasonic sensor over two GPIO lines:
//!
//! - [`bus::CutebotBus`]: frame transmission with post-write settle
//! - [`ack::AckWaiter`]: blocking wait for motion completion
//! - Motion, servo and headlight controllers
//! - [`track::TrackSensor`]: line-tracking position
//! - [`sonar::DistanceSensor`]: busy-wait echo timing
//! - [`robot::CutebotPro`]: everything behind one owner
//!
//! # Error handling
//!
//! The plain methods keep the controller's historical behavior: bus
//! failures are logged and ignored, ack timeouts proceed, and distance
//! failures read as [`sonar::OUT_OF_RANGE_CM`]. Each has a `try_` twin that
//! returns a [`DriverError`] instead.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ack;
pub mod bus;
pub mod error;
pub mod led;
pub mod motion;
pub mod robot;
pub mod servo;
pub mod sonar;
pub mod track;

#[cfg(test)]
mod mock;

pub use ack::AckWaiter;
pub use bus::CutebotBus;
pub use error::DriverError;
pub use led::LedController;
pub use motion::MotionController;
pub use robot::CutebotPro;
pub use servo::ServoController;
pub use sonar::{DistanceSensor, OUT_OF_RANGE_CM};
pub use track::TrackSensor;

pub use cutebot_core::config::{analog_pin, digital_pin, EdgePin, GpioPort, RobotConfig};
pub use cutebot_core::{Color, Led, Polarity, SensorCountMask, ServoPort, ServoType, TrackPosition};
pub use cutebot_hal::{Clock, I2cBus, InputPin, OutputPin};
