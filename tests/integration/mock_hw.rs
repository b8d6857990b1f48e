//! Mock adapters for integration tests.
//!
//! Every port the service touches has a recording double here, so tests
//! can script a ride tick by tick and assert on the full lamp history
//! without real GPIO or I²C.

#![allow(dead_code)]

use std::cell::Cell;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
use leansignal::app::events::AppEvent;
use leansignal::app::ports::{
    ClockPort, DisplayPort, EventSink, LampPort, MotionSensorPort, SwitchLevels, SwitchPort,
};
use leansignal::control::orientation::AccelSample;
use leansignal::error::SensorError;

// ── Gravity vectors ───────────────────────────────────────────

pub const UPRIGHT: AccelSample = AccelSample::new(0.0, 0.0, 1.0);
/// Raw pitch ≈ +30°.
pub const LEAN_RIGHT: AccelSample = AccelSample::new(-0.5, 0.0, 0.866);
/// Raw pitch ≈ −30°.
pub const LEAN_LEFT: AccelSample = AccelSample::new(0.5, 0.0, 0.866);

// ── MockBoard ─────────────────────────────────────────────────

/// Motion sensor, switches, and lamp on one scripted board.
pub struct MockBoard {
    pub accel: Result<AccelSample, SensorError>,
    pub levels: SwitchLevels,
    pub lamp: bool,
    /// Every value written to the lamp, in order.
    pub lamp_writes: Vec<bool>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            accel: Ok(UPRIGHT),
            levels: SwitchLevels::default(),
            lamp: false,
            lamp_writes: Vec::new(),
        }
    }

    pub fn press_left(&mut self, pressed: bool) {
        self.levels.left_high = pressed;
    }

    pub fn press_right(&mut self, pressed: bool) {
        self.levels.right_high = pressed;
    }

    pub fn release_all(&mut self) {
        self.levels = SwitchLevels::default();
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionSensorPort for MockBoard {
    fn read_accel(&mut self) -> Result<AccelSample, SensorError> {
        self.accel
    }
}

impl SwitchPort for MockBoard {
    fn read_levels(&mut self) -> SwitchLevels {
        self.levels
    }
}

impl LampPort for MockBoard {
    fn set_lamp(&mut self, on: bool) {
        self.lamp = on;
        self.lamp_writes.push(on);
    }

    fn is_lamp_on(&self) -> bool {
        self.lamp
    }
}

// ── ManualClock ───────────────────────────────────────────────

/// Clock the test advances by hand.
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl ClockPort for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

// ── Recording sinks ───────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub screens: Vec<Vec<String>>,
}

impl DisplayPort for RecordingDisplay {
    fn show_lines(&mut self, lines: &[&str]) {
        self.screens
            .push(lines.iter().map(|l| (*l).to_string()).collect());
    }
}

// ── Accelerometer on a mock I²C bus ───────────────────────────

/// Minimal MPU6050 register model: answers WHO_AM_I, swallows config
/// writes, and serves `sample` from the accel output registers.
pub struct MockMpuBus {
    pub sample: AccelSample,
    pub fail: bool,
    pointer: u8,
}

impl MockMpuBus {
    pub fn new(sample: AccelSample) -> Self {
        Self {
            sample,
            fail: false,
            pointer: 0,
        }
    }

    fn accel_bytes(&self) -> [u8; 6] {
        let raw = |g: f32| ((g * 16_384.0) as i16).to_be_bytes();
        let (x, y, z) = (raw(self.sample.x), raw(self.sample.y), raw(self.sample.z));
        [x[0], x[1], y[0], y[1], z[0], z[1]]
    }
}

impl ErrorType for MockMpuBus {
    type Error = ErrorKind;
}

impl I2c for MockMpuBus {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => self.pointer = bytes[0],
                Operation::Read(buf) => match self.pointer {
                    0x75 => buf[0] = 0x68,
                    0x3B => buf.copy_from_slice(&self.accel_bytes()[..buf.len()]),
                    _ => buf.fill(0),
                },
            }
        }
        Ok(())
    }
}
