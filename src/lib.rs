//! LeanSignal firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod fsm;
pub mod pins;
pub mod telemetry;

// Hardware-facing modules; the ESP-IDF paths are cfg-gated inside, the
// host builds fall back to simulated GPIO.
pub mod adapters;
pub mod drivers;
pub mod sensors;
