//! Configuration types
//!
//! Board wiring and protocol timing for the Cutebot Pro. Defaults match the
//! V2 board; a TOML override can be parsed with the `toml` feature.

pub mod board;
pub mod gpio;

#[cfg(feature = "toml")]
pub mod toml;

pub use board::*;
pub use gpio::{analog_pin, digital_pin, EdgePin, GpioPort};

#[cfg(feature = "toml")]
pub use self::toml::parse_config;
