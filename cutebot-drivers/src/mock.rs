//! Simulated hardware for host tests
//!
//! Time is shared between [`SimClock`], [`SimEcho`] and [`SimTrigger`] so
//! pin levels can be scripted against the clock the driver reads.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use cutebot_hal::{Clock, I2cBus, InputPin, OutputPin};
use cutebot_protocol::{Command, CommandFrame};

/// Shared simulated time in microseconds
pub type SimTime = Rc<Cell<u64>>;

/// Clock that advances by `tick_us` on every read and jumps on delays
pub struct SimClock {
    time: SimTime,
    tick_us: u64,
    /// Every `pause_ms` call, in order
    pub pauses: Vec<u32>,
    /// Total microseconds spent in `delay_us`/`delay_ms`
    pub busy_us: u64,
}

impl SimClock {
    pub fn new(tick_us: u64) -> Self {
        Self {
            time: Rc::new(Cell::new(0)),
            tick_us,
            pauses: Vec::new(),
            busy_us: 0,
        }
    }

    /// Handle to the shared time, for pins
    pub fn time(&self) -> SimTime {
        self.time.clone()
    }

    fn advance(&self, us: u64) {
        self.time.set(self.time.get() + us);
    }
}

impl Clock for SimClock {
    fn now_us(&self) -> u64 {
        let t = self.time.get();
        self.advance(self.tick_us);
        t
    }

    fn delay_us(&mut self, us: u32) {
        self.busy_us += u64::from(us);
        self.advance(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms * 1_000);
    }

    fn pause_ms(&mut self, ms: u32) {
        self.pauses.push(ms);
        self.advance(u64::from(ms) * 1_000);
    }
}

/// I2C bus that records writes and replays scripted reads
#[derive(Default)]
pub struct MockBus {
    /// (address, bytes) of every successful write
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Bytes returned by upcoming reads, front first
    pub reads: VecDeque<u8>,
    /// Returned once `reads` is empty
    pub default_read: u8,
    pub fail_writes: bool,
    pub fail_reads: bool,
    /// Number of read transactions attempted
    pub read_count: usize,
}

impl MockBus {
    pub fn with_reads(reads: &[u8]) -> Self {
        Self {
            reads: reads.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Decode every written frame back into a command
    pub fn commands(&self) -> Vec<Command> {
        self.writes
            .iter()
            .map(|(_, bytes)| {
                let frame = CommandFrame::decode(bytes).unwrap();
                Command::from_frame(&frame).unwrap()
            })
            .collect()
    }
}

impl I2cBus for MockBus {
    type Error = ();

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(());
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, _address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.read_count += 1;
        if self.fail_reads {
            return Err(());
        }
        for byte in buf.iter_mut() {
            *byte = self.reads.pop_front().unwrap_or(self.default_read);
        }
        Ok(())
    }
}

/// Echo line that is high over `[rise_at, fall_at)`
pub struct SimEcho {
    time: SimTime,
    pub rise_at: Option<u64>,
    pub fall_at: Option<u64>,
}

impl SimEcho {
    pub fn new(time: SimTime, rise_at: Option<u64>, fall_at: Option<u64>) -> Self {
        Self {
            time,
            rise_at,
            fall_at,
        }
    }
}

impl InputPin for SimEcho {
    fn is_high(&mut self) -> bool {
        let now = self.time.get();
        let risen = self.rise_at.is_some_and(|r| now >= r);
        let fallen = self.fall_at.is_some_and(|f| now >= f);
        risen && !fallen
    }
}

/// Trigger line that logs (time, level) on every write
pub struct SimTrigger {
    time: SimTime,
    pub edges: Vec<(u64, bool)>,
}

impl SimTrigger {
    pub fn new(time: SimTime) -> Self {
        Self {
            time,
            edges: Vec::new(),
        }
    }
}

impl OutputPin for SimTrigger {
    fn set_high(&mut self) {
        self.edges.push((self.time.get(), true));
    }

    fn set_low(&mut self) {
        self.edges.push((self.time.get(), false));
    }
}
