//! Motion command conversion
//!
//! Converts percent-based motion requests into device-unit [`Command`]s.
//! The only validation performed is the clamping the controller firmware
//! requires; everything else is passed through as given.

use cutebot_protocol::commands::{
    Command, MOTOR_FORWARD, MOTOR_REVERSE, MOVE_BACKWARD, MOVE_FORWARD, SPEED_DIR_LEFT_REVERSE,
    SPEED_DIR_RIGHT_REVERSE,
};

/// Longest distance a timed move accepts, in centimeters
pub const MAX_MOVE_DISTANCE_CM: i32 = 6_000;

/// Slowest speed the controller holds during a timed move, in mm/s
pub const MIN_MOVE_SPEED_MM_S: i32 = 200;

/// Fastest speed the controller accepts for a timed move, in mm/s
pub const MAX_MOVE_SPEED_MM_S: i32 = 500;

/// mm/s per percent of speed
const MM_S_PER_PERCENT: i32 = 5;

/// Assumed worst-case travel time per meter, in ms
const MOVE_MS_PER_METER: u32 = 8_000;

/// Slack added to every timed-move ack timeout, in ms
const MOVE_ACK_MARGIN_MS: u32 = 3_000;

/// A timed move ready to send, plus how long to wait for completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimedMove {
    /// Command to transmit
    pub command: Command,
    /// Upper bound on travel time before giving up on the ack
    pub ack_timeout_ms: u32,
}

/// Build a differential wheel speed command
///
/// Speeds are percent in `[-100, 100]`; negative runs the wheel backwards.
pub fn differential_speed(left: i8, right: i8) -> Command {
    let mut direction = 0;
    if left < 0 {
        direction |= SPEED_DIR_LEFT_REVERSE;
    }
    if right < 0 {
        direction |= SPEED_DIR_RIGHT_REVERSE;
    }

    Command::Speed {
        left: left.unsigned_abs(),
        right: right.unsigned_abs(),
        direction,
    }
}

/// Build a closed-loop move over a distance
///
/// A speed of zero or below drives backwards at the magnitude given. The
/// distance is clamped to `[0, 6000]` cm and the derived speed to
/// `[200, 500]` mm/s.
pub fn timed_move(speed_percent: i16, distance_cm: i32) -> TimedMove {
    let distance_mm = distance_cm.clamp(0, MAX_MOVE_DISTANCE_CM) * 10;

    let (speed, direction) = if speed_percent <= 0 {
        (-i32::from(speed_percent), MOVE_BACKWARD)
    } else {
        (i32::from(speed_percent), MOVE_FORWARD)
    };
    let speed_mm_s =
        (speed * MM_S_PER_PERCENT).clamp(MIN_MOVE_SPEED_MM_S, MAX_MOVE_SPEED_MM_S);

    TimedMove {
        command: Command::TimedMove {
            distance_mm: distance_mm as u16,
            speed_mm_s: speed_mm_s as u16,
            direction,
        },
        ack_timeout_ms: move_ack_timeout_ms(distance_mm as u32),
    }
}

/// Ack timeout for a move of `distance_mm`
///
/// A heuristic bound on travel time, not a measured completion signal.
pub fn move_ack_timeout_ms(distance_mm: u32) -> u32 {
    // distance_mm / 1000 * 8000 stays integral for whole millimeters
    distance_mm * MOVE_MS_PER_METER / 1_000 + MOVE_ACK_MARGIN_MS
}

/// Build an auxiliary motor command
///
/// Zero is sent as "reverse at speed 0", matching the controller's own
/// convention.
pub fn single_motor(speed: i8) -> Command {
    let direction = if speed > 0 { MOTOR_FORWARD } else { MOTOR_REVERSE };
    Command::Motor {
        speed: speed.unsigned_abs(),
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_differential_forward() {
        assert_eq!(
            differential_speed(50, 50),
            Command::Speed {
                left: 50,
                right: 50,
                direction: 0
            }
        );
    }

    #[test]
    fn test_differential_direction_bits() {
        assert_eq!(
            differential_speed(-20, 40),
            Command::Speed {
                left: 20,
                right: 40,
                direction: 0x01
            }
        );
        assert_eq!(
            differential_speed(20, -40),
            Command::Speed {
                left: 20,
                right: 40,
                direction: 0x02
            }
        );
        assert_eq!(
            differential_speed(-100, -100),
            Command::Speed {
                left: 100,
                right: 100,
                direction: 0x03
            }
        );
    }

    #[test]
    fn test_timed_move_clamps_distance_and_speed() {
        let mv = timed_move(10, 10_000);
        assert_eq!(
            mv.command,
            Command::TimedMove {
                distance_mm: 60_000,
                speed_mm_s: 200,
                direction: MOVE_FORWARD
            }
        );
        let [hi, lo] = 60_000u16.to_be_bytes();
        assert_eq!((hi, lo), (0xEA, 0x60));
    }

    #[test]
    fn test_timed_move_negative_distance_is_zero() {
        let mv = timed_move(50, -20);
        assert_eq!(
            mv.command,
            Command::TimedMove {
                distance_mm: 0,
                speed_mm_s: 250,
                direction: MOVE_FORWARD
            }
        );
        assert_eq!(mv.ack_timeout_ms, 3_000);
    }

    #[test]
    fn test_timed_move_backwards() {
        let mv = timed_move(-60, 100);
        assert_eq!(
            mv.command,
            Command::TimedMove {
                distance_mm: 1_000,
                speed_mm_s: 300,
                direction: MOVE_BACKWARD
            }
        );
    }

    #[test]
    fn test_timed_move_zero_speed_is_backward_minimum() {
        let mv = timed_move(0, 10);
        assert_eq!(
            mv.command,
            Command::TimedMove {
                distance_mm: 100,
                speed_mm_s: 200,
                direction: MOVE_BACKWARD
            }
        );
    }

    #[test]
    fn test_timed_move_speed_upper_clamp() {
        let mv = timed_move(100, 10);
        assert!(matches!(
            mv.command,
            Command::TimedMove {
                speed_mm_s: 500,
                ..
            }
        ));
        let mv = timed_move(i16::MAX, 10);
        assert!(matches!(
            mv.command,
            Command::TimedMove {
                speed_mm_s: 500,
                ..
            }
        ));
    }

    #[test]
    fn test_move_ack_timeout() {
        // 1 m -> 8 s travel + 3 s margin
        assert_eq!(timed_move(50, 100).ack_timeout_ms, 11_000);
        // 60 m -> 480 s + 3 s
        assert_eq!(timed_move(50, 6_000).ack_timeout_ms, 483_000);
        assert_eq!(move_ack_timeout_ms(125), 4_000);
    }

    #[test]
    fn test_single_motor() {
        assert_eq!(
            single_motor(70),
            Command::Motor {
                speed: 70,
                direction: MOTOR_FORWARD
            }
        );
        assert_eq!(
            single_motor(-70),
            Command::Motor {
                speed: 70,
                direction: MOTOR_REVERSE
            }
        );
        assert_eq!(
            single_motor(0),
            Command::Motor {
                speed: 0,
                direction: MOTOR_REVERSE
            }
        );
    }
}
