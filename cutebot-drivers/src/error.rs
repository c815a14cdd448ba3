//! Driver error classification

use cutebot_protocol::FrameError;

/// Why a driver operation did not complete normally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// The I2C write of a command frame failed
    BusWriteFailed,
    /// The single-byte I2C read failed
    BusReadFailed,
    /// No nonzero status byte before the ack timeout
    AckTimeout,
    /// Echo line stayed high past the echo timeout
    EchoTimeout,
    /// Echo line never rose within the configured start timeout
    EchoNeverStarted,
    /// A command could not be framed
    Frame(FrameError),
}

impl From<FrameError> for DriverError {
    fn from(e: FrameError) -> Self {
        DriverError::Frame(e)
    }
}
