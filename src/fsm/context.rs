//! Shared mutable context threaded through every FSM handler.
//!
//! `SignalContext` is the single struct that entry actions and guards read
//! from and write to.  It contains this tick's inputs, the lamp command,
//! the timing marks the guards maintain, and the configuration.  Think of
//! it as the "blackboard" in a blackboard architecture.

use crate::config::SignalConfig;

// ---------------------------------------------------------------------------
// Inputs (written by the service before each run; read by guards)
// ---------------------------------------------------------------------------

/// Switch state for one tick, already normalised to "asserted".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchInputs {
    pub left: bool,
    pub right: bool,
}

impl SwitchInputs {
    pub const RELEASED: Self = Self {
        left: false,
        right: false,
    };

    pub fn both_released(&self) -> bool {
        !self.left && !self.right
    }
}

// ---------------------------------------------------------------------------
// Direction memory
// ---------------------------------------------------------------------------

/// The direction most recently signalled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

// ---------------------------------------------------------------------------
// Timing marks (owned by the guards)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingMarks {
    /// Clock reading of the most recent switch activity.
    pub last_activity_ms: u64,
    /// Consecutive "both released" evaluations seen so far.
    pub release_ticks: u16,
}

// ---------------------------------------------------------------------------
// SignalContext
// ---------------------------------------------------------------------------

/// The shared context passed to every entry action and guard.
pub struct SignalContext {
    // -- Inputs --
    /// Switch state sampled this tick.
    pub switches: SwitchInputs,
    /// Filtered pitch (degrees) from the orientation estimator.
    pub pitch_deg: f32,
    /// Monotonic clock reading for this tick (milliseconds).
    pub now_ms: u64,

    // -- Outputs --
    /// Lamp drive level requested by the most recent entry action.
    pub lamp_on: bool,

    // -- Guard / entry state --
    pub timing: TimingMarks,
    pub last_direction: Direction,

    // -- Configuration --
    pub config: SignalConfig,
}

impl SignalContext {
    /// Create a new context with the given configuration.
    pub fn new(config: SignalConfig) -> Self {
        Self {
            switches: SwitchInputs::RELEASED,
            pitch_deg: 0.0,
            now_ms: 0,
            lamp_on: false,
            timing: TimingMarks::default(),
            last_direction: Direction::None,
            config,
        }
    }

    /// Milliseconds since the last switch activity.
    pub fn ms_since_activity(&self) -> u64 {
        self.now_ms.saturating_sub(self.timing.last_activity_ms)
    }

    /// Record switch activity at the current tick.
    pub fn stamp_activity(&mut self) {
        self.timing.last_activity_ms = self.now_ms;
    }
}
