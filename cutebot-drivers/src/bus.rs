//! Command bus to the onboard controller
//!
//! [`CutebotBus`] owns the I2C peripheral and the clock. Every frame goes
//! out in a single write transaction followed by a busy-wait settle; the
//! controller drops commands that arrive back to back without it.

use cutebot_core::config::BusConfig;
use cutebot_hal::{Clock, I2cBus};
use cutebot_protocol::{Command, CommandFrame};

use crate::error::DriverError;

/// Exclusive owner of the I2C link to the controller
pub struct CutebotBus<I2C, C> {
    i2c: I2C,
    clock: C,
    config: BusConfig,
}

impl<I2C, C> CutebotBus<I2C, C>
where
    I2C: I2cBus,
    C: Clock,
{
    /// Create a bus driver
    pub fn new(i2c: I2C, clock: C, config: BusConfig) -> Self {
        Self { i2c, clock, config }
    }

    /// Get the bus configuration
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// The clock shared by all timing loops
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock, for delays
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// The underlying I2C peripheral
    pub fn i2c(&self) -> &I2C {
        &self.i2c
    }

    /// Mutable access to the underlying I2C peripheral
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Release the peripheral and clock
    pub fn release(self) -> (I2C, C) {
        (self.i2c, self.clock)
    }

    /// Frame and send a raw opcode with parameters
    pub fn try_send(&mut self, opcode: u8, params: &[u8]) -> Result<(), DriverError> {
        let frame = CommandFrame::new(opcode, params)?;
        self.write_frame(&frame)
    }

    /// Frame and send a raw opcode, ignoring bus errors
    pub fn send(&mut self, opcode: u8, params: &[u8]) {
        if let Err(_e) = self.try_send(opcode, params) {
            #[cfg(feature = "defmt")]
            defmt::warn!("send {=u8:#x} failed: {}", opcode, _e);
        }
    }

    /// Send a typed command
    pub fn try_command(&mut self, command: Command) -> Result<(), DriverError> {
        let frame = command.to_frame()?;
        self.write_frame(&frame)
    }

    /// Send a typed command, ignoring bus errors
    pub fn command(&mut self, command: Command) {
        if let Err(_e) = self.try_command(command) {
            #[cfg(feature = "defmt")]
            defmt::warn!("{} failed: {}", command, _e);
        }
    }

    /// Read one unsigned byte from the controller
    pub fn try_read_byte(&mut self) -> Result<u8, DriverError> {
        self.i2c
            .read_u8(self.config.address)
            .map_err(|_| DriverError::BusReadFailed)
    }

    /// Read one unsigned byte, yielding 0 if the read fails
    pub fn read_byte(&mut self) -> u8 {
        self.try_read_byte().unwrap_or_else(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("read failed: {}", _e);
            0
        })
    }

    fn write_frame(&mut self, frame: &CommandFrame) -> Result<(), DriverError> {
        let bytes = frame.encode_to_vec()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("i2c write {=[u8]:x}", &bytes[..]);

        let result = self
            .i2c
            .write(self.config.address, &bytes)
            .map_err(|_| DriverError::BusWriteFailed);

        // The settle applies whether or not the write went through
        self.clock.delay_us(self.config.settle_us);
        result
    }
}
