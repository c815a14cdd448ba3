//! Line-tracking sensor decoding
//!
//! The track sensors report one bit per sensor, left to right:
//!
//! ```text
//! bit:    0         1     2    3      4
//!      FarLeft    Left   Mid  Right  FarRight
//! ```
//!
//! [`classify`] folds such a bitmask into a single [`TrackPosition`]. It is
//! a pure function and is shared by every sensor variant; only the mask
//! (which sensors are fitted) and the polarity differ.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit for the far-left sensor
pub const BIT_FAR_LEFT: u8 = 1 << 0;
/// Bit for the left sensor
pub const BIT_LEFT: u8 = 1 << 1;
/// Bit for the middle sensor
pub const BIT_MID: u8 = 1 << 2;
/// Bit for the right sensor
pub const BIT_RIGHT: u8 = 1 << 3;
/// Bit for the far-right sensor
pub const BIT_FAR_RIGHT: u8 = 1 << 4;

/// All five sensor bits
pub const FULL_MASK: u8 = 0b1_1111;

/// Where the track lies relative to the robot
///
/// Discriminants are the sensor bit that best represents each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TrackPosition {
    /// No sensor sees the track
    OffTrack = 0,
    /// Track under the outermost left sensor only
    FarLeft = BIT_FAR_LEFT,
    /// Track to the left of centre
    Left = BIT_LEFT,
    /// Track centred under the robot
    Mid = BIT_MID,
    /// Track to the right of centre
    Right = BIT_RIGHT,
    /// Track under the outermost right sensor only
    FarRight = BIT_FAR_RIGHT,
}

impl TrackPosition {
    /// Track is left of centre (near or far)
    pub fn is_left(self) -> bool {
        matches!(self, TrackPosition::Left | TrackPosition::FarLeft)
    }

    /// Track is right of centre (near or far)
    pub fn is_right(self) -> bool {
        matches!(self, TrackPosition::Right | TrackPosition::FarRight)
    }
}

/// Which sensors are fitted, as a mask over the five-bit layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SensorCountMask {
    /// Left and right sensors
    Track2,
    /// Left, middle and right sensors
    Track3,
    /// All but the middle sensor (Cutebot Pro layout)
    #[default]
    Track4,
    /// All five sensors
    Track5,
}

impl SensorCountMask {
    /// Bitmask applied to the raw reading
    pub const fn bits(self) -> u8 {
        match self {
            SensorCountMask::Track2 => BIT_LEFT | BIT_RIGHT,
            SensorCountMask::Track3 => BIT_LEFT | BIT_MID | BIT_RIGHT,
            SensorCountMask::Track4 => BIT_FAR_LEFT | BIT_LEFT | BIT_RIGHT | BIT_FAR_RIGHT,
            SensorCountMask::Track5 => FULL_MASK,
        }
    }
}

/// How the track contrasts with the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    /// Dark line on a light floor; a set bit means "sees dark"
    #[default]
    BlackLineOnWhite,
    /// Light line on a dark floor
    WhiteLineOnBlack,
}

/// Classify a raw sensor bitmask
///
/// Polarity is applied to the raw value before masking. Outer sensors take
/// priority: a far sensor together with the middle one reads as the near
/// position on that side.
pub fn classify(raw: u8, mask: SensorCountMask, polarity: Polarity) -> TrackPosition {
    let raw = match polarity {
        Polarity::BlackLineOnWhite => raw,
        Polarity::WhiteLineOnBlack => !raw,
    };
    let track = raw & mask.bits();

    if track == 0 {
        return TrackPosition::OffTrack;
    }

    if track & (BIT_FAR_LEFT | BIT_FAR_RIGHT) != 0 {
        let far_left = track & BIT_FAR_LEFT != 0;
        return match (track & BIT_MID != 0, far_left) {
            (true, true) => TrackPosition::Left,
            (true, false) => TrackPosition::Right,
            (false, true) => TrackPosition::FarLeft,
            (false, false) => TrackPosition::FarRight,
        };
    }

    if track & (BIT_LEFT | BIT_RIGHT) == (BIT_LEFT | BIT_RIGHT) || track == BIT_MID {
        return TrackPosition::Mid;
    }
    if track & BIT_LEFT != 0 {
        return TrackPosition::Left;
    }
    if track & BIT_RIGHT != 0 {
        return TrackPosition::Right;
    }

    // Only a lone middle bit could remain, and that matched above.
    TrackPosition::OffTrack
}

/// Convert the controller's 4-bit track byte into the five-bit layout
///
/// The controller packs its four sensors into bits 0-3 with no middle
/// sensor; the right pair moves up one bit to skip the middle slot.
pub fn remap_device_bits(state: u8) -> u8 {
    (state & 0b0011) + ((state & 0b1100) << 1)
}
