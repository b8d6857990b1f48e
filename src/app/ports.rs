//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SignalService (domain)
//! ```
//!
//! Driven adapters (accelerometer, switches, lamp, clock, event sinks,
//! display) implement these traits.  The
//! [`SignalService`](super::service::SignalService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::control::orientation::AccelSample;
use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapters: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the tilt sensor.
pub trait MotionSensorPort {
    /// Read one raw acceleration vector.
    fn read_accel(&mut self) -> Result<AccelSample, SensorError>;
}

/// Raw electrical level of each signal switch line (`true` = HIGH).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchLevels {
    pub left_high: bool,
    pub right_high: bool,
}

/// Read-side port for the two momentary signal switches.
pub trait SwitchPort {
    fn read_levels(&mut self) -> SwitchLevels;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the indicator lamp.
pub trait LampPort {
    /// Drive the lamp output.
    fn set_lamp(&mut self, on: bool);

    /// Level most recently written.
    fn is_lamp_on(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.  Injected so tests can advance time
/// without sleeping.
pub trait ClockPort {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, PC
/// telemetry frames, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Display port
// ───────────────────────────────────────────────────────────────

/// Text status display.  Each call replaces the whole screen.
pub trait DisplayPort {
    fn show_lines(&mut self, lines: &[&str]);
}
