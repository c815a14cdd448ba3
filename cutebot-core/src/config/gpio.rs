//! Fixed GPIO port table
//!
//! The four expansion ports G1-G4 are wired to micro:bit edge connector
//! pins. The table is the same for analog and digital use; it is exposed
//! so behavior code can reach the pins without going through the bus.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// micro:bit edge connector pin used by the Cutebot Pro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EdgePin {
    P1,
    P2,
    P8,
    P12,
    P13,
    P14,
}

impl EdgePin {
    /// Edge connector pin number
    pub const fn number(self) -> u8 {
        match self {
            EdgePin::P1 => 1,
            EdgePin::P2 => 2,
            EdgePin::P8 => 8,
            EdgePin::P12 => 12,
            EdgePin::P13 => 13,
            EdgePin::P14 => 14,
        }
    }
}

/// Expansion port on the robot chassis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum GpioPort {
    G1 = 0,
    G2 = 1,
    G3 = 2,
    G4 = 3,
}

const ANALOG_GP: [EdgePin; 4] = [EdgePin::P1, EdgePin::P2, EdgePin::P13, EdgePin::P14];
const DIGITAL_GP: [EdgePin; 4] = [EdgePin::P1, EdgePin::P2, EdgePin::P13, EdgePin::P14];

/// Pin to use for analog access on `port`
pub const fn analog_pin(port: GpioPort) -> EdgePin {
    ANALOG_GP[port as usize]
}

/// Pin to use for digital access on `port`
pub const fn digital_pin(port: GpioPort) -> EdgePin {
    DIGITAL_GP[port as usize]
}
