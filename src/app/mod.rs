//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the turn-signal rules: tilt estimation feeding the
//! signal FSM, plus the display and telemetry views of that state.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod display;
pub mod events;
pub mod ports;
pub mod service;
