//! Outbound application events.
//!
//! The [`SignalService`](super::service::SignalService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log to serial, stream frames to a PC
//! plotter, etc.

use crate::fsm::SignalState;
use crate::fsm::context::Direction;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),

    /// The FSM transitioned between states.
    StateChanged { from: SignalState, to: SignalState },

    /// The motion sensor could not be read this tick.
    SensorFault,

    /// The application service has started (carries initial state).
    Started(SignalState),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub state: SignalState,
    pub roll_deg: f32,
    pub pitch_deg: f32,
    pub lamp_on: bool,
    pub last_direction: Direction,
}
