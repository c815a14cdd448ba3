//! Servo command conversion
//!
//! The controller drives up to four hobby servos on a shared channel that
//! takes a value in `[0, 180]`. Positional servos interpret it as an angle
//! over their full travel; continuous-rotation servos interpret it as a
//! speed, with 90 meaning stop.

use cutebot_protocol::commands::{Command, SERVO_MAX};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Servo port on the expansion header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ServoPort {
    S1 = 0,
    S2 = 1,
    S3 = 2,
    S4 = 3,
}

/// Mechanical travel of a servo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ServoType {
    /// Continuous rotation (no angular travel)
    Continuous,
    /// 90° travel
    St90,
    /// 180° travel
    #[default]
    St180,
    /// 270° travel
    St270,
    /// 360° travel
    St360,
}

impl ServoType {
    /// Travel in degrees (0 for continuous rotation)
    pub const fn travel_deg(self) -> i32 {
        match self {
            ServoType::Continuous => 0,
            ServoType::St90 => 90,
            ServoType::St180 => 180,
            ServoType::St270 => 270,
            ServoType::St360 => 360,
        }
    }

    /// Degrees spanned by the `[0, 180]` channel
    ///
    /// A continuous servo has no travel to scale against, so angles are
    /// passed through as for a 180° servo.
    const fn channel_span_deg(self) -> i32 {
        match self {
            ServoType::Continuous => 180,
            other => other.travel_deg(),
        }
    }
}

/// Linearly remap `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`
///
/// Integer arithmetic in `i64`, truncating toward zero. Values outside the
/// input range extrapolate, saturating at the `i64` limits. `in_lo` and
/// `in_hi` must differ.
pub fn map_range(value: i32, in_lo: i32, in_hi: i32, out_lo: i32, out_hi: i32) -> i64 {
    let offset = i64::from(value) - i64::from(in_lo);
    let out_span = i64::from(out_hi) - i64::from(out_lo);
    let in_span = i64::from(in_hi) - i64::from(in_lo);
    (offset.saturating_mul(out_span) / in_span).saturating_add(i64::from(out_lo))
}

/// Clamp a mapped value onto the servo channel
fn to_channel(value: i64) -> u8 {
    value.clamp(0, i64::from(SERVO_MAX)) as u8
}

/// Build a servo angle command
///
/// `angle_deg` is in `[0, travel]` for the given servo type.
pub fn angle(port: ServoPort, angle_deg: i32, servo: ServoType) -> Command {
    let span = servo.channel_span_deg();
    Command::Servo {
        port: port as u8,
        value: to_channel(map_range(angle_deg, 0, span, 0, i32::from(SERVO_MAX))),
    }
}

/// Build a continuous-rotation speed command
///
/// `speed_percent` is in `[-100, 100]`; 0 stops the servo.
pub fn speed(port: ServoPort, speed_percent: i32) -> Command {
    Command::Servo {
        port: port as u8,
        value: to_channel(map_range(speed_percent, -100, 100, 0, i32::from(SERVO_MAX))),
    }
}
