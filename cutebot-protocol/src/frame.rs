//! Frame encoding and decoding for the Cutebot Pro command protocol.
//!
//! Frame format:
//! - HEADER (2 bytes): 0xFF 0xF9
//! - OPCODE (1 byte): command identifier
//! - COUNT (1 byte): number of parameter bytes
//! - PARAMS (COUNT bytes): command-specific data

use heapless::Vec;

/// Fixed two-byte frame header
pub const FRAME_HEADER: [u8; 2] = [0xFF, 0xF9];

/// Maximum parameter bytes in one frame
///
/// The largest command in the table (timed move) carries five.
pub const MAX_PARAMS: usize = 16;

/// Bytes preceding the parameters (HEADER + OPCODE + COUNT)
pub const FRAME_OVERHEAD: usize = 4;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = FRAME_OVERHEAD + MAX_PARAMS;

/// Errors that can occur during frame encoding or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// More parameters than a frame can carry
    TooManyParams,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Frame is shorter than its header or declared length
    Incomplete,
    /// First two bytes are not the frame header
    InvalidHeader,
    /// Bytes remain after the declared parameters
    TrailingBytes,
    /// Opcode is not part of the command table
    UnknownOpcode(u8),
    /// Parameter count or values do not fit the opcode
    InvalidParams,
}

/// A command frame, built fresh for every bus write
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandFrame {
    /// Command identifier
    pub opcode: u8,
    /// Parameter bytes, in transmission order
    pub params: Vec<u8, MAX_PARAMS>,
}

impl CommandFrame {
    /// Create a new frame with the given opcode and parameters
    pub fn new(opcode: u8, params: &[u8]) -> Result<Self, FrameError> {
        let params = Vec::from_slice(params).map_err(|_| FrameError::TooManyParams)?;
        Ok(Self { opcode, params })
    }

    /// Number of bytes this frame occupies on the wire
    pub fn encoded_len(&self) -> usize {
        FRAME_OVERHEAD + self.params.len()
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.encoded_len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[..2].copy_from_slice(&FRAME_HEADER);
        buffer[2] = self.opcode;
        buffer[3] = self.params.len() as u8;
        buffer[FRAME_OVERHEAD..frame_len].copy_from_slice(&self.params);

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }

    /// Decode exactly one frame from `bytes`
    ///
    /// The slice must hold a single complete frame and nothing else, which
    /// is how frames arrive in an I2C write transaction.
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() < FRAME_OVERHEAD {
            return Err(FrameError::Incomplete);
        }
        if bytes[..2] != FRAME_HEADER {
            return Err(FrameError::InvalidHeader);
        }

        let count = bytes[3] as usize;
        if count > MAX_PARAMS {
            return Err(FrameError::TooManyParams);
        }

        let end = FRAME_OVERHEAD + count;
        if bytes.len() < end {
            return Err(FrameError::Incomplete);
        }
        if bytes.len() > end {
            return Err(FrameError::TrailingBytes);
        }

        Self::new(bytes[2], &bytes[FRAME_OVERHEAD..end])
    }
}
