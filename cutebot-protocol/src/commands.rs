//! Command table for the Cutebot Pro onboard controller
//!
//! Each [`Command`] variant corresponds to one opcode. Values carried here
//! are already in device units; percent-to-device conversion and clamping
//! happen in `cutebot-core` before a command is built.

use crate::frame::{CommandFrame, FrameError};

// Opcodes
pub const OP_SPEED: u8 = 0x10;
pub const OP_LED: u8 = 0x20;
pub const OP_MOTOR: u8 = 0x30;
pub const OP_SERVO: u8 = 0x40;
pub const OP_TRACK: u8 = 0x60;
pub const OP_MOVE: u8 = 0x84;
pub const OP_STATUS: u8 = 0xA0;

/// First parameter of a speed command: both wheels are addressed
pub const SPEED_BOTH_WHEELS: u8 = 2;

/// Parameter of the track request
pub const TRACK_REQUEST: u8 = 0x00;

/// Parameter of the status query that reports motion completion
pub const STATUS_MOTION_DONE: u8 = 0x05;

/// Speed direction bit: left wheel runs backwards
pub const SPEED_DIR_LEFT_REVERSE: u8 = 0x01;

/// Speed direction bit: right wheel runs backwards
pub const SPEED_DIR_RIGHT_REVERSE: u8 = 0x02;

/// Timed move direction: forwards
pub const MOVE_FORWARD: u8 = 0;

/// Timed move direction: backwards
pub const MOVE_BACKWARD: u8 = 3;

/// Single motor direction: forwards
pub const MOTOR_FORWARD: u8 = 1;

/// Single motor direction: backwards or stopped
pub const MOTOR_REVERSE: u8 = 0;

/// Largest value the servo channel accepts
pub const SERVO_MAX: u8 = 180;

/// Commands understood by the onboard controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set both wheel speeds
    Speed {
        /// Left wheel speed magnitude (percent)
        left: u8,
        /// Right wheel speed magnitude (percent)
        right: u8,
        /// `SPEED_DIR_*` bits
        direction: u8,
    },
    /// Drive a set distance under closed-loop control
    TimedMove {
        /// Distance in millimeters
        distance_mm: u16,
        /// Speed in millimeters per second
        speed_mm_s: u16,
        /// `MOVE_FORWARD` or `MOVE_BACKWARD`
        direction: u8,
    },
    /// Drive the auxiliary motor port
    Motor {
        /// Speed magnitude (percent)
        speed: u8,
        /// `MOTOR_FORWARD` or `MOTOR_REVERSE`
        direction: u8,
    },
    /// Servo angle, or speed for a continuous-rotation servo
    Servo {
        /// Servo port index (0-3)
        port: u8,
        /// Channel value (0-180)
        value: u8,
    },
    /// Set headlight colour
    Led {
        /// LED selector (0 left, 1 right, 2 both)
        led: u8,
        red: u8,
        green: u8,
        blue: u8,
    },
    /// Latch the track sensor state for the next read
    TrackRequest,
    /// Latch the motion-complete flag for the next read
    StatusQuery,
}

impl Command {
    /// Opcode for this command
    pub fn opcode(&self) -> u8 {
        match self {
            Command::Speed { .. } => OP_SPEED,
            Command::TimedMove { .. } => OP_MOVE,
            Command::Motor { .. } => OP_MOTOR,
            Command::Servo { .. } => OP_SERVO,
            Command::Led { .. } => OP_LED,
            Command::TrackRequest => OP_TRACK,
            Command::StatusQuery => OP_STATUS,
        }
    }

    /// Encode this command into a frame
    pub fn to_frame(&self) -> Result<CommandFrame, FrameError> {
        let opcode = self.opcode();
        match *self {
            Command::Speed {
                left,
                right,
                direction,
            } => CommandFrame::new(opcode, &[SPEED_BOTH_WHEELS, left, right, direction]),
            Command::TimedMove {
                distance_mm,
                speed_mm_s,
                direction,
            } => {
                let [dist_hi, dist_lo] = distance_mm.to_be_bytes();
                let [speed_hi, speed_lo] = speed_mm_s.to_be_bytes();
                CommandFrame::new(opcode, &[dist_hi, dist_lo, speed_hi, speed_lo, direction])
            }
            Command::Motor { speed, direction } => CommandFrame::new(opcode, &[speed, direction]),
            Command::Servo { port, value } => CommandFrame::new(opcode, &[port, value]),
            Command::Led {
                led,
                red,
                green,
                blue,
            } => CommandFrame::new(opcode, &[led, red, green, blue]),
            Command::TrackRequest => CommandFrame::new(opcode, &[TRACK_REQUEST]),
            Command::StatusQuery => CommandFrame::new(opcode, &[STATUS_MOTION_DONE]),
        }
    }

    /// Parse a command from a frame
    pub fn from_frame(frame: &CommandFrame) -> Result<Self, FrameError> {
        let p = &frame.params[..];
        match (frame.opcode, p) {
            (OP_SPEED, &[SPEED_BOTH_WHEELS, left, right, direction]) => Ok(Command::Speed {
                left,
                right,
                direction,
            }),
            (OP_MOVE, &[dist_hi, dist_lo, speed_hi, speed_lo, direction]) => {
                Ok(Command::TimedMove {
                    distance_mm: u16::from_be_bytes([dist_hi, dist_lo]),
                    speed_mm_s: u16::from_be_bytes([speed_hi, speed_lo]),
                    direction,
                })
            }
            (OP_MOTOR, &[speed, direction]) => Ok(Command::Motor { speed, direction }),
            (OP_SERVO, &[port, value]) => Ok(Command::Servo { port, value }),
            (OP_LED, &[led, red, green, blue]) => Ok(Command::Led {
                led,
                red,
                green,
                blue,
            }),
            (OP_TRACK, &[TRACK_REQUEST]) => Ok(Command::TrackRequest),
            (OP_STATUS, &[STATUS_MOTION_DONE]) => Ok(Command::StatusQuery),
            (OP_SPEED | OP_MOVE | OP_MOTOR | OP_SERVO | OP_LED | OP_TRACK | OP_STATUS, _) => {
                Err(FrameError::InvalidParams)
            }
            (opcode, _) => Err(FrameError::UnknownOpcode(opcode)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(cmd: Command) -> heapless::Vec<u8, { crate::frame::MAX_FRAME_SIZE }> {
        cmd.to_frame().unwrap().encode_to_vec().unwrap()
    }

    #[test]
    fn test_speed_frame() {
        let bytes = wire(Command::Speed {
            left: 50,
            right: 30,
            direction: SPEED_DIR_RIGHT_REVERSE,
        });
        assert_eq!(&bytes[..], &[0xFF, 0xF9, 0x10, 4, 2, 50, 30, 0x02]);
    }

    #[test]
    fn test_timed_move_splits_big_endian() {
        let bytes = wire(Command::TimedMove {
            distance_mm: 60_000,
            speed_mm_s: 200,
            direction: MOVE_FORWARD,
        });
        assert_eq!(&bytes[..], &[0xFF, 0xF9, 0x84, 5, 0xEA, 0x60, 0x00, 0xC8, 0]);
    }

    #[test]
    fn test_fixed_parameter_requests() {
        assert_eq!(&wire(Command::TrackRequest)[..], &[0xFF, 0xF9, 0x60, 1, 0x00]);
        assert_eq!(&wire(Command::StatusQuery)[..], &[0xFF, 0xF9, 0xA0, 1, 0x05]);
    }

    #[test]
    fn test_led_frame() {
        let bytes = wire(Command::Led {
            led: 2,
            red: 0,
            green: 255,
            blue: 0,
        });
        assert_eq!(&bytes[..], &[0xFF, 0xF9, 0x20, 4, 2, 0, 255, 0]);
    }

    #[test]
    fn test_parse_back_from_wire() {
        let cmd = Command::Servo { port: 3, value: 90 };
        let frame = CommandFrame::decode(&wire(cmd)).unwrap();
        assert_eq!(Command::from_frame(&frame), Ok(cmd));
    }

    #[test]
    fn test_parse_unknown_opcode() {
        let frame = CommandFrame::new(0x55, &[1]).unwrap();
        assert_eq!(
            Command::from_frame(&frame),
            Err(FrameError::UnknownOpcode(0x55))
        );
    }

    #[test]
    fn test_parse_wrong_param_count() {
        let frame = CommandFrame::new(OP_SERVO, &[1, 2, 3]).unwrap();
        assert_eq!(Command::from_frame(&frame), Err(FrameError::InvalidParams));
    }
}
