//! I2C bus abstractions
//!
//! Provides the I2C master operations used to talk to the robot's
//! onboard controller.

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// The whole slice goes out as one transaction.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Read a single unsigned byte
    fn read_u8(&mut self, address: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.read(address, &mut buf)?;
        Ok(buf[0])
    }
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(address, buf)
    }
}
