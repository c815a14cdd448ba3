//! Servo control on the expansion header

use cutebot_core::servo;
use cutebot_core::{ServoPort, ServoType};
use cutebot_hal::{Clock, I2cBus};

use crate::bus::CutebotBus;
use crate::error::DriverError;

/// Servo commands on a borrowed bus
pub struct ServoController<'a, I2C, C> {
    bus: &'a mut CutebotBus<I2C, C>,
}

impl<'a, I2C, C> ServoController<'a, I2C, C>
where
    I2C: I2cBus,
    C: Clock,
{
    pub fn new(bus: &'a mut CutebotBus<I2C, C>) -> Self {
        Self { bus }
    }

    /// Move a positional servo to `angle_deg` within its travel
    pub fn set_angle(&mut self, port: ServoPort, angle_deg: i32, servo: ServoType) {
        self.bus.command(servo::angle(port, angle_deg, servo));
    }

    pub fn try_set_angle(
        &mut self,
        port: ServoPort,
        angle_deg: i32,
        servo: ServoType,
    ) -> Result<(), DriverError> {
        self.bus.try_command(servo::angle(port, angle_deg, servo))
    }

    /// Run a continuous-rotation servo at `speed_percent` (`[-100, 100]`)
    ///
    /// Shares the angle channel; the servo reads it as speed.
    pub fn set_speed(&mut self, port: ServoPort, speed_percent: i32) {
        self.bus.command(servo::speed(port, speed_percent));
    }

    pub fn try_set_speed(&mut self, port: ServoPort, speed_percent: i32) -> Result<(), DriverError> {
        self.bus.try_command(servo::speed(port, speed_percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBus, SimClock};
    use cutebot_core::config::BusConfig;

    #[test]
    fn test_angle_and_speed_share_opcode() {
        let mut bus = CutebotBus::new(MockBus::default(), SimClock::new(0), BusConfig::default());
        let mut servos = ServoController::new(&mut bus);
        servos.set_angle(ServoPort::S2, 135, ServoType::St270);
        servos.set_speed(ServoPort::S4, 100);

        let writes = &bus.i2c().writes;
        assert_eq!(writes[0].1, vec![0xFF, 0xF9, 0x40, 2, 1, 90]);
        assert_eq!(writes[1].1, vec![0xFF, 0xF9, 0x40, 2, 3, 180]);
    }
}
