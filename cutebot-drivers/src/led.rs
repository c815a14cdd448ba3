//! Headlight control

use cutebot_core::led;
use cutebot_core::{Color, Led};
use cutebot_hal::{Clock, I2cBus};

use crate::bus::CutebotBus;
use crate::error::DriverError;

/// Headlight commands on a borrowed bus
pub struct LedController<'a, I2C, C> {
    bus: &'a mut CutebotBus<I2C, C>,
}

impl<'a, I2C, C> LedController<'a, I2C, C>
where
    I2C: I2cBus,
    C: Clock,
{
    pub fn new(bus: &'a mut CutebotBus<I2C, C>) -> Self {
        Self { bus }
    }

    /// Set one or both headlights to `color`
    pub fn set_color(&mut self, which: Led, color: Color) {
        self.bus.command(led::color(which, color));
    }

    pub fn try_set_color(&mut self, which: Led, color: Color) -> Result<(), DriverError> {
        self.bus.try_command(led::color(which, color))
    }

    /// Turn headlights off
    pub fn off(&mut self, which: Led) {
        self.set_color(which, Color::NONE);
    }
}
