//! Adapters over `embedded-hal` 1.0 blocking traits
//!
//! Wrap a chip HAL's I2C peripheral or GPIO pins to use them with the
//! Cutebot driver:
//!
//! ```ignore
//! let bus = EhI2c::new(twim);
//! let trigger = EhOutput::new(p8);
//! let echo = EhInput::new(p12);
//! ```

use crate::gpio::{InputPin, OutputPin};
use crate::i2c::I2cBus;

/// I2C master backed by an [`embedded_hal::i2c::I2c`] implementation
pub struct EhI2c<T> {
    inner: T,
}

impl<T> EhI2c<T> {
    /// Wrap an `embedded-hal` I2C peripheral
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Release the wrapped peripheral
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T: embedded_hal::i2c::I2c> I2cBus for EhI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.inner.read(address, buf)
    }
}

/// Output line backed by an [`embedded_hal::digital::OutputPin`]
///
/// Pin errors are dropped: GPIO writes on the supported chips are
/// infallible in practice.
pub struct EhOutput<T> {
    inner: T,
}

impl<T> EhOutput<T> {
    /// Wrap an `embedded-hal` output pin
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Release the wrapped pin
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T: embedded_hal::digital::OutputPin> OutputPin for EhOutput<T> {
    fn set_high(&mut self) {
        let _ = self.inner.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.inner.set_low();
    }
}

/// Input line backed by an [`embedded_hal::digital::InputPin`]
///
/// A failed read is reported as low.
pub struct EhInput<T> {
    inner: T,
}

impl<T> EhInput<T> {
    /// Wrap an `embedded-hal` input pin
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Release the wrapped pin
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T: embedded_hal::digital::InputPin> InputPin for EhInput<T> {
    fn is_high(&mut self) -> bool {
        self.inner.is_high().unwrap_or(false)
    }
}
