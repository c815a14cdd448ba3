//! Board-agnostic core logic for the Cutebot Pro driver
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Track sensor decoding (bitmask to semantic position)
//! - Percent-to-device unit conversion and protocol clamping for motion,
//!   servo and LED commands
//! - Board configuration (bus timing, sonar wiring, track polarity) and the
//!   fixed GPIO port table

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod led;
pub mod motion;
pub mod servo;
pub mod track;

pub use led::{Color, Led};
pub use servo::{ServoPort, ServoType};
pub use track::{classify, Polarity, SensorCountMask, TrackPosition};
