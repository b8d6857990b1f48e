//! System configuration parameters
//!
//! All tunable parameters for the turn signal controller. The defaults are
//! the values flashed at build time; there is no runtime reconfiguration and
//! nothing is persisted across power cycles.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Electrical level at which a signal switch counts as pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveLevel {
    /// Pressed = line HIGH (switch to VCC, external pull-down).
    High,
    /// Pressed = line LOW (switch to GND, pull-up).
    Low,
}

impl ActiveLevel {
    /// Translate a raw line level (`true` = HIGH) into "asserted".
    pub const fn is_asserted(self, line_high: bool) -> bool {
        match self {
            Self::High => line_high,
            Self::Low => !line_high,
        }
    }
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    // --- Timing ---
    /// Control loop period (milliseconds)
    pub poll_interval_ms: u32,
    /// Silence on both switches before a blinking signal pauses (milliseconds)
    pub hold_duration_ms: u32,

    // --- Lean-angle auto-cancel ---
    /// Pitch magnitude (degrees) that resumes a paused signal
    pub lean_threshold_deg: f32,
    /// Consecutive "both switches released" ticks that finish a cancel
    pub release_debounce_ticks: u16,
    /// Weight of the previous estimate in the tilt low-pass filter
    pub filter_weight: f32,

    // --- Inputs ---
    /// Level at which the signal switches read as pressed
    pub switch_active_level: ActiveLevel,

    // --- Telemetry / display ---
    /// Stream roll/pitch frames to the PC over the console UART
    pub telemetry_enabled: bool,
    /// Telemetry frame period (milliseconds)
    pub telemetry_interval_ms: u32,
    /// Status display refresh period (milliseconds)
    pub display_interval_ms: u32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            // Timing
            poll_interval_ms: 20,   // 50 Hz
            hold_duration_ms: 3000, // 3 s

            // Lean-angle auto-cancel
            lean_threshold_deg: 15.0,
            release_debounce_ticks: 10,
            filter_weight: 0.94,

            // Inputs
            switch_active_level: ActiveLevel::High,

            // Telemetry / display
            telemetry_enabled: false,
            telemetry_interval_ms: 100,
            display_interval_ms: 250,
        }
    }
}

/// Errors from [`SignalConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl SignalConfig {
    /// Reject values that would make the state machine misbehave.
    /// Invalid ranges are reported, never silently clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be > 0"));
        }
        if self.hold_duration_ms < self.poll_interval_ms {
            return Err(ConfigError::ValidationFailed(
                "hold_duration_ms must cover at least one poll interval",
            ));
        }
        if !(self.lean_threshold_deg > 0.0 && self.lean_threshold_deg < 90.0) {
            return Err(ConfigError::ValidationFailed(
                "lean_threshold_deg must be within (0, 90)",
            ));
        }
        if self.release_debounce_ticks == 0 {
            return Err(ConfigError::ValidationFailed(
                "release_debounce_ticks must be > 0",
            ));
        }
        if !(0.0..1.0).contains(&self.filter_weight) {
            return Err(ConfigError::ValidationFailed(
                "filter_weight must be within [0, 1)",
            ));
        }
        if self.telemetry_interval_ms == 0 || self.display_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "telemetry/display intervals must be > 0",
            ));
        }
        Ok(())
    }

    /// Log level for the console once the control loop runs.  Telemetry
    /// frames share the console UART, so text logging is silenced while
    /// streaming to keep the plotter's `'$'` frame sync clean.
    pub fn console_log_level(&self) -> LevelFilter {
        if self.telemetry_enabled {
            LevelFilter::Off
        } else {
            LevelFilter::Info
        }
    }
}
