//! Wheel and auxiliary motor control
//!
//! ```ignore
//! let mut motion = robot.motion();
//! motion.set_differential_speed(40, 40);
//! motion.timed_move(60, 50); // blocks until done or timed out
//! ```

use cutebot_core::motion;
use cutebot_hal::{Clock, I2cBus};

use crate::ack::AckWaiter;
use crate::bus::CutebotBus;
use crate::error::DriverError;

/// Motion commands on a borrowed bus
pub struct MotionController<'a, I2C, C> {
    bus: &'a mut CutebotBus<I2C, C>,
    ack: AckWaiter,
}

impl<'a, I2C, C> MotionController<'a, I2C, C>
where
    I2C: I2cBus,
    C: Clock,
{
    /// Create a controller that waits for moves with `ack`
    pub fn new(bus: &'a mut CutebotBus<I2C, C>, ack: AckWaiter) -> Self {
        Self { bus, ack }
    }

    /// Set both wheel speeds in percent (`[-100, 100]`, negative reverses)
    pub fn set_differential_speed(&mut self, left: i8, right: i8) {
        self.bus.command(motion::differential_speed(left, right));
    }

    /// Set both wheel speeds, reporting bus errors
    pub fn try_set_differential_speed(&mut self, left: i8, right: i8) -> Result<(), DriverError> {
        self.bus.try_command(motion::differential_speed(left, right))
    }

    /// Stop both wheels
    pub fn stop(&mut self) {
        self.set_differential_speed(0, 0);
    }

    /// Drive `distance_cm` at `speed_percent` and block until done
    ///
    /// Speed at or below zero drives backwards. Distance is clamped to
    /// `[0, 6000]` cm. Returns after the controller acks or the travel-time
    /// heuristic runs out, whichever comes first.
    pub fn timed_move(&mut self, speed_percent: i16, distance_cm: i32) {
        let mv = motion::timed_move(speed_percent, distance_cm);

        #[cfg(feature = "defmt")]
        defmt::debug!("move {} (ack timeout {=u32} ms)", mv.command, mv.ack_timeout_ms);

        self.bus.command(mv.command);
        self.ack.wait(self.bus, mv.ack_timeout_ms);
    }

    /// Drive a set distance, reporting bus errors and ack timeouts
    ///
    /// Returns without waiting if the move command itself fails to send.
    pub fn try_timed_move(&mut self, speed_percent: i16, distance_cm: i32) -> Result<(), DriverError> {
        let mv = motion::timed_move(speed_percent, distance_cm);
        self.bus.try_command(mv.command)?;
        self.ack.try_wait(self.bus, mv.ack_timeout_ms)
    }

    /// Run the auxiliary motor port at `speed` percent
    pub fn single_motor(&mut self, speed: i8) {
        self.bus.command(motion::single_motor(speed));
    }

    /// Run the auxiliary motor port, reporting bus errors
    pub fn try_single_motor(&mut self, speed: i8) -> Result<(), DriverError> {
        self.bus.try_command(motion::single_motor(speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBus, SimClock};
    use cutebot_core::config::BusConfig;
    use cutebot_protocol::commands::MOVE_FORWARD;
    use cutebot_protocol::Command;

    fn bus(i2c: MockBus) -> CutebotBus<MockBus, SimClock> {
        CutebotBus::new(i2c, SimClock::new(1), BusConfig::default())
    }

    #[test]
    fn test_differential_speed_frame() {
        let mut bus = bus(MockBus::default());
        MotionController::new(&mut bus, AckWaiter::default()).set_differential_speed(-30, 60);

        assert_eq!(
            bus.i2c().writes[0].1,
            vec![0xFF, 0xF9, 0x10, 4, 2, 30, 60, 0x01]
        );
    }

    #[test]
    fn test_stop_sends_zero_speed() {
        let mut bus = bus(MockBus::default());
        MotionController::new(&mut bus, AckWaiter::default()).stop();

        assert_eq!(
            bus.i2c().commands(),
            vec![Command::Speed {
                left: 0,
                right: 0,
                direction: 0
            }]
        );
    }

    #[test]
    fn test_timed_move_sends_then_waits_for_ack() {
        let mut bus = bus(MockBus::with_reads(&[0, 1]));
        MotionController::new(&mut bus, AckWaiter::default()).timed_move(10, 10_000);

        let writes = &bus.i2c().writes;
        assert_eq!(writes[0].1, vec![0xFF, 0xF9, 0x84, 5, 0xEA, 0x60, 0x00, 0xC8, 0]);
        assert_eq!(
            bus.i2c().commands()[1..],
            [Command::StatusQuery, Command::StatusQuery]
        );
        assert_eq!(bus.clock().pauses, vec![10, 500]);
    }

    #[test]
    fn test_timed_move_times_out_after_heuristic() {
        // 0 cm -> 3000 ms timeout
        let mut bus = bus(MockBus::default());
        let result =
            MotionController::new(&mut bus, AckWaiter::default()).try_timed_move(50, 0);

        assert_eq!(result, Err(DriverError::AckTimeout));
        assert_eq!(
            bus.i2c().commands()[0],
            Command::TimedMove {
                distance_mm: 0,
                speed_mm_s: 250,
                direction: MOVE_FORWARD
            }
        );
        assert!(bus.clock().now_ms() >= 3_000 + 500);
    }

    #[test]
    fn test_try_timed_move_skips_wait_when_send_fails() {
        let mut i2c = MockBus::default();
        i2c.fail_writes = true;
        let mut bus = bus(i2c);

        let result =
            MotionController::new(&mut bus, AckWaiter::default()).try_timed_move(50, 100);
        assert_eq!(result, Err(DriverError::BusWriteFailed));
        assert!(bus.clock().pauses.is_empty());
    }

    #[test]
    fn test_single_motor() {
        let mut bus = bus(MockBus::default());
        let mut motion = MotionController::new(&mut bus, AckWaiter::default());
        motion.single_motor(-45);
        motion.single_motor(45);

        assert_eq!(bus.i2c().writes[0].1, vec![0xFF, 0xF9, 0x30, 2, 45, 0]);
        assert_eq!(bus.i2c().writes[1].1, vec![0xFF, 0xF9, 0x30, 2, 45, 1]);
    }
}
