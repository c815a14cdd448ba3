//! Cutebot Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the Cutebot Pro
//! driver needs. Board support code implements them directly, or wraps
//! `embedded-hal` peripherals with the adapters in [`embedded`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Behavior program (external)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cutebot-drivers (bus, sensors, motion) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cutebot-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │ embassy-time  │
//! │   adapters    │       │    clock      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O (sonar lines)
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`clock::Clock`] - Monotonic time source and busy waits

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod i2c;

#[cfg(feature = "embedded-hal")]
pub mod embedded;

#[cfg(feature = "embassy")]
pub mod embassy;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::{InputPin, OutputPin};
pub use i2c::I2cBus;
