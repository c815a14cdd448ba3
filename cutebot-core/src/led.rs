//! Headlight colour conversion

use cutebot_protocol::commands::Command;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Headlight selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Led {
    Left = 0,
    Right = 1,
    Both = 2,
}

/// 24-bit RGB colour, `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    /// Headlight off
    pub const NONE: Color = Color::BLACK;
    pub const RED: Color = Color(0xFF0000);
    pub const ORANGE: Color = Color(0xFFA500);
    pub const YELLOW: Color = Color(0xFFFF00);
    pub const GREEN: Color = Color(0x00FF00);
    pub const CYAN: Color = Color(0x00FFFF);
    pub const BLUE: Color = Color(0x0000FF);
    pub const PURPLE: Color = Color(0xA033E5);
    pub const MAGENTA: Color = Color(0xFF00FF);
    pub const WHITE: Color = Color(0xFFFFFF);

    /// Build from separate channels
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl From<u32> for Color {
    fn from(rgb: u32) -> Self {
        Color(rgb)
    }
}

/// Build a headlight colour command
///
/// Bits above the low 24 are ignored.
pub fn color(led: Led, color: Color) -> Command {
    Command::Led {
        led: led as u8,
        red: color.red(),
        green: color.green(),
        blue: color.blue(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_on_both() {
        assert_eq!(
            color(Led::Both, Color(0x00FF00)),
            Command::Led {
                led: 2,
                red: 0,
                green: 255,
                blue: 0
            }
        );
    }

    #[test]
    fn test_channel_split() {
        let c = Color(0x12_34_56);
        assert_eq!((c.red(), c.green(), c.blue()), (0x12, 0x34, 0x56));
        assert_eq!(Color::rgb(0x12, 0x34, 0x56), c);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::BLACK, Color::NONE);
        assert_eq!(Color::BLACK, Color::default());
        assert_eq!(Color::CYAN, Color::rgb(0, 255, 255));
        assert_eq!(Color::MAGENTA, Color::rgb(255, 0, 255));
        assert_eq!(Color::YELLOW, Color::rgb(255, 255, 0));
        assert_eq!(Color::WHITE, Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_high_byte_ignored() {
        assert_eq!(
            color(Led::Left, Color(0xFF_00_00_FF)),
            Command::Led {
                led: 0,
                red: 0,
                green: 0,
                blue: 255
            }
        );
    }
}
