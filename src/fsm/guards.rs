//! Transition guards.
//!
//! Each guard is a tag in [`GuardId`] dispatched by `match` to a plain
//! predicate over [`SignalContext`].  Guards are evaluated in table order
//! and evaluation stops at the first one that returns `true`, so a guard's
//! side effects (activity stamp, debounce counter) only happen when it is
//! actually reached.

use super::context::{Direction, SignalContext};

/// Predicate identifiers referenced by the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardId {
    /// Unconditional (startup).
    Always,
    /// Left switch asserted; stamps activity.
    LeftSwitch,
    /// Right switch asserted; stamps activity.
    RightSwitch,
    /// No switch activity for longer than the hold duration.
    HoldElapsed,
    /// Still leaned right after a right signal.
    LeanRight,
    /// Still leaned left after a left signal.
    LeanLeft,
    /// Both switches released for the debounce tick count.
    SwitchesReleased,
}

impl GuardId {
    pub fn evaluate(self, ctx: &mut SignalContext) -> bool {
        match self {
            Self::Always => true,
            Self::LeftSwitch => left_switch(ctx),
            Self::RightSwitch => right_switch(ctx),
            Self::HoldElapsed => hold_elapsed(ctx),
            Self::LeanRight => lean_right(ctx),
            Self::LeanLeft => lean_left(ctx),
            Self::SwitchesReleased => switches_released(ctx),
        }
    }
}

fn left_switch(ctx: &mut SignalContext) -> bool {
    if ctx.switches.left {
        ctx.stamp_activity();
    }
    ctx.switches.left
}

fn right_switch(ctx: &mut SignalContext) -> bool {
    if ctx.switches.right {
        ctx.stamp_activity();
    }
    ctx.switches.right
}

fn hold_elapsed(ctx: &mut SignalContext) -> bool {
    ctx.ms_since_activity() > u64::from(ctx.config.hold_duration_ms)
}

fn lean_right(ctx: &mut SignalContext) -> bool {
    ctx.pitch_deg > ctx.config.lean_threshold_deg && ctx.last_direction == Direction::Right
}

fn lean_left(ctx: &mut SignalContext) -> bool {
    ctx.pitch_deg < -ctx.config.lean_threshold_deg && ctx.last_direction == Direction::Left
}

/// Counts consecutive released evaluations and fires on the Nth.
///
/// An evaluation that sees a pressed switch leaves the counter where it
/// is; only firing clears it.
fn switches_released(ctx: &mut SignalContext) -> bool {
    if !ctx.switches.both_released() {
        return false;
    }

    ctx.timing.release_ticks = ctx.timing.release_ticks.saturating_add(1);
    if ctx.timing.release_ticks >= ctx.config.release_debounce_ticks {
        ctx.timing.release_ticks = 0;
        return true;
    }
    false
}
