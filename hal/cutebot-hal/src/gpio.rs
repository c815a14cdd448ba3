//! GPIO pin abstractions
//!
//! Provides traits for the digital lines the driver toggles and samples
//! directly, outside the I2C bus.

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin
///
/// Sampling takes `&mut self` so implementations backed by `embedded-hal`
/// pins can be used without interior mutability.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}
