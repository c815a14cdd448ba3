//! Line-tracking sensor
//!
//! The controller samples its four reflectance sensors when it receives a
//! track request, and returns them as one byte on the next read. Every
//! query here is a fresh round trip; nothing is cached between calls.

use cutebot_core::config::TrackConfig;
use cutebot_core::track::{classify, remap_device_bits};
use cutebot_core::{Polarity, TrackPosition};
use cutebot_hal::{Clock, I2cBus};
use cutebot_protocol::Command;

use crate::bus::CutebotBus;
use crate::error::DriverError;

/// Track queries on a borrowed bus
pub struct TrackSensor<'a, I2C, C> {
    bus: &'a mut CutebotBus<I2C, C>,
    config: TrackConfig,
}

impl<'a, I2C, C> TrackSensor<'a, I2C, C>
where
    I2C: I2cBus,
    C: Clock,
{
    /// Create a sensor view that classifies with `config`
    pub fn new(bus: &'a mut CutebotBus<I2C, C>, config: TrackConfig) -> Self {
        Self { bus, config }
    }

    /// Polarity used for classification
    pub fn polarity(&self) -> Polarity {
        self.config.polarity
    }

    /// Sensor bits in the five-bit layout, before polarity and masking
    pub fn try_read_raw(&mut self) -> Result<u8, DriverError> {
        self.bus.try_command(Command::TrackRequest)?;
        let state = self.bus.try_read_byte()?;
        Ok(remap_device_bits(state))
    }

    /// Sensor bits in the five-bit layout; a failed read gives 0
    pub fn read_raw(&mut self) -> u8 {
        self.bus.command(Command::TrackRequest);
        remap_device_bits(self.bus.read_byte())
    }

    /// Where the track is, reporting bus errors
    pub fn try_read_track(&mut self) -> Result<TrackPosition, DriverError> {
        let raw = self.try_read_raw()?;
        Ok(self.classify(raw))
    }

    /// Where the track is
    pub fn read_track(&mut self) -> TrackPosition {
        let raw = self.read_raw();
        self.classify(raw)
    }

    /// Track is left of centre
    pub fn is_at_left(&mut self) -> bool {
        self.read_track().is_left()
    }

    /// Track is right of centre
    pub fn is_at_right(&mut self) -> bool {
        self.read_track().is_right()
    }

    /// Track is centred
    pub fn is_on_track(&mut self) -> bool {
        self.read_track() == TrackPosition::Mid
    }

    /// No sensor sees the track
    pub fn is_off_track(&mut self) -> bool {
        self.read_track() == TrackPosition::OffTrack
    }

    fn classify(&self, raw: u8) -> TrackPosition {
        let position = classify(raw, self.config.mask, self.config.polarity);

        #[cfg(feature = "defmt")]
        defmt::trace!("track {=u8:b} -> {}", raw, position);

        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBus, SimClock};
    use cutebot_core::config::BusConfig;

    fn bus(i2c: MockBus) -> CutebotBus<MockBus, SimClock> {
        CutebotBus::new(i2c, SimClock::new(0), BusConfig::default())
    }

    #[test]
    fn test_read_track_remaps_device_byte() {
        let mut bus = bus(MockBus::with_reads(&[0b1010]));
        let mut sensor = TrackSensor::new(&mut bus, TrackConfig::default());

        assert_eq!(sensor.read_track(), TrackPosition::FarRight);
        assert_eq!(bus.i2c().commands(), vec![Command::TrackRequest]);
        assert_eq!(bus.i2c().writes[0].1, vec![0xFF, 0xF9, 0x60, 1, 0x00]);
    }

    #[test]
    fn test_white_on_black_inverts() {
        // 0b1010 -> 0b10010; inverted under the 4-sensor mask -> 0b01001
        let mut bus = bus(MockBus::with_reads(&[0b1010]));
        let config = TrackConfig {
            polarity: Polarity::WhiteLineOnBlack,
            ..TrackConfig::default()
        };
        let mut sensor = TrackSensor::new(&mut bus, config);

        assert_eq!(sensor.read_track(), TrackPosition::FarLeft);
    }

    #[test]
    fn test_predicates() {
        let mut bus = bus(MockBus::with_reads(&[0b0001, 0b0010, 0b1000, 0b0110, 0b0000]));
        let mut sensor = TrackSensor::new(&mut bus, TrackConfig::default());

        assert!(sensor.is_at_left()); // far left
        assert!(sensor.is_at_left()); // left
        assert!(sensor.is_at_right()); // far right
        assert!(sensor.is_on_track()); // left + right
        assert!(sensor.is_off_track());
    }

    #[test]
    fn test_each_predicate_is_a_round_trip() {
        let mut i2c = MockBus::default();
        i2c.default_read = 0b0100;
        let mut bus = bus(i2c);
        let mut sensor = TrackSensor::new(&mut bus, TrackConfig::default());

        let first = sensor.is_off_track();
        let second = sensor.is_off_track();
        assert_eq!(first, second);
        assert!(!first);

        assert_eq!(bus.i2c().commands().len(), 2);
        assert_eq!(bus.i2c().read_count, 2);
    }

    #[test]
    fn test_try_read_track_surfaces_bus_errors() {
        let mut i2c = MockBus::default();
        i2c.fail_reads = true;
        let mut bus = bus(i2c);
        let mut sensor = TrackSensor::new(&mut bus, TrackConfig::default());

        assert_eq!(sensor.try_read_track(), Err(DriverError::BusReadFailed));
        // Legacy path treats the failed read as an empty reading
        assert_eq!(sensor.read_track(), TrackPosition::OffTrack);
    }
}
