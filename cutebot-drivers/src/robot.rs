//! Whole-robot facade
//!
//! [`CutebotPro`] owns the I2C bus, the clock and the sonar lines, so a
//! behavior program holds one value and every bus operation is serialized
//! through `&mut self`.
//!
//! # Usage
//!
//! ```ignore
//! let mut robot = CutebotPro::new(i2c, clock, trigger, echo, RobotConfig::default());
//! robot.set_polarity(Polarity::WhiteLineOnBlack);
//!
//! loop {
//!     if robot.is_off_track() && robot.read_distance_cm() < 40 {
//!         robot.set_differential_speed(60, 60);
//!     } else {
//!         robot.stop();
//!     }
//! }
//! ```

use cutebot_core::config::{RobotConfig, TrackConfig};
use cutebot_core::{Color, Led, Polarity, ServoPort, ServoType, TrackPosition};
use cutebot_hal::{Clock, I2cBus, InputPin, OutputPin};

use crate::ack::AckWaiter;
use crate::bus::CutebotBus;
use crate::error::DriverError;
use crate::led::LedController;
use crate::motion::MotionController;
use crate::servo::ServoController;
use crate::sonar::DistanceSensor;
use crate::track::TrackSensor;

/// Cutebot Pro V2 with all peripherals attached
pub struct CutebotPro<I2C, C, TRIG, ECHO> {
    bus: CutebotBus<I2C, C>,
    sonar: DistanceSensor<TRIG, ECHO>,
    ack: AckWaiter,
    track: TrackConfig,
}

impl<I2C, C, TRIG, ECHO> CutebotPro<I2C, C, TRIG, ECHO>
where
    I2C: I2cBus,
    C: Clock,
    TRIG: OutputPin,
    ECHO: InputPin,
{
    /// Assemble the robot from its peripherals
    pub fn new(i2c: I2C, clock: C, trigger: TRIG, echo: ECHO, config: RobotConfig) -> Self {
        #[cfg(feature = "defmt")]
        defmt::info!("Cutebot Pro at {=u8:#x}, {}", config.bus.address, config.track);

        Self {
            bus: CutebotBus::new(i2c, clock, config.bus),
            sonar: DistanceSensor::new(trigger, echo, config.sonar),
            ack: AckWaiter::new(config.ack),
            track: config.track,
        }
    }

    /// Release all peripherals
    pub fn release(self) -> (I2C, C, TRIG, ECHO) {
        let (i2c, clock) = self.bus.release();
        let (trigger, echo) = self.sonar.release();
        (i2c, clock, trigger, echo)
    }

    /// The command bus
    pub fn bus(&mut self) -> &mut CutebotBus<I2C, C> {
        &mut self.bus
    }

    /// Motion controller borrowing the bus
    pub fn motion(&mut self) -> MotionController<'_, I2C, C> {
        MotionController::new(&mut self.bus, self.ack)
    }

    /// Servo controller borrowing the bus
    pub fn servos(&mut self) -> ServoController<'_, I2C, C> {
        ServoController::new(&mut self.bus)
    }

    /// Headlight controller borrowing the bus
    pub fn leds(&mut self) -> LedController<'_, I2C, C> {
        LedController::new(&mut self.bus)
    }

    /// Track sensor borrowing the bus, using the current polarity
    pub fn track_sensor(&mut self) -> TrackSensor<'_, I2C, C> {
        TrackSensor::new(&mut self.bus, self.track)
    }

    /// The ultrasonic sensor
    pub fn sonar(&mut self) -> &mut DistanceSensor<TRIG, ECHO> {
        &mut self.sonar
    }

    // Track

    /// Set the line colour used by every later track query
    pub fn set_polarity(&mut self, polarity: Polarity) {
        self.track.polarity = polarity;
    }

    pub fn polarity(&self) -> Polarity {
        self.track.polarity
    }

    pub fn read_track(&mut self) -> TrackPosition {
        self.track_sensor().read_track()
    }

    pub fn try_read_track(&mut self) -> Result<TrackPosition, DriverError> {
        self.track_sensor().try_read_track()
    }

    pub fn is_at_left(&mut self) -> bool {
        self.track_sensor().is_at_left()
    }

    pub fn is_at_right(&mut self) -> bool {
        self.track_sensor().is_at_right()
    }

    pub fn is_on_track(&mut self) -> bool {
        self.track_sensor().is_on_track()
    }

    pub fn is_off_track(&mut self) -> bool {
        self.track_sensor().is_off_track()
    }

    // Distance

    /// Distance ahead in cm, or [`crate::OUT_OF_RANGE_CM`]
    pub fn read_distance_cm(&mut self) -> u16 {
        self.sonar.read_distance_cm(self.bus.clock_mut())
    }

    pub fn try_read_distance_cm(&mut self) -> Result<u16, DriverError> {
        self.sonar.try_read_distance_cm(self.bus.clock_mut())
    }

    // Motion

    pub fn set_differential_speed(&mut self, left: i8, right: i8) {
        self.motion().set_differential_speed(left, right);
    }

    pub fn stop(&mut self) {
        self.motion().stop();
    }

    /// Drive a set distance; blocks until the move completes or times out
    pub fn timed_move(&mut self, speed_percent: i16, distance_cm: i32) {
        self.motion().timed_move(speed_percent, distance_cm);
    }

    pub fn try_timed_move(&mut self, speed_percent: i16, distance_cm: i32) -> Result<(), DriverError> {
        self.motion().try_timed_move(speed_percent, distance_cm)
    }

    pub fn single_motor(&mut self, speed: i8) {
        self.motion().single_motor(speed);
    }

    // Servos and headlights

    pub fn set_angle(&mut self, port: ServoPort, angle_deg: i32, servo: ServoType) {
        self.servos().set_angle(port, angle_deg, servo);
    }

    pub fn set_speed(&mut self, port: ServoPort, speed_percent: i32) {
        self.servos().set_speed(port, speed_percent);
    }

    pub fn set_color(&mut self, led: Led, color: Color) {
        self.leds().set_color(led, color);
    }
}
