//! Entry actions and the static transition table.
//!
//! Each state is one row: a plain `fn` entry action plus an ordered slice
//! of `(guard, destination)` pairs.  No closures, no dynamic dispatch, no
//! heap.
//!
//! ```text
//!  INIT ──▶ NORMAL_OFF ──[left]──▶ BLINK_LEFT ──[right]──▶ NORMAL_OFF
//!               │                      │
//!            [right]                [hold]
//!               ▼                      ▼
//!          BLINK_RIGHT ──[hold]──▶ TEMPORARY_OFF ──[released ×N]──▶ NORMAL_OFF
//!               ▲   │                  │    │
//!               │   └─[left]──▶ NORMAL_OFF  │
//!               └──[pitch > +t, last=R]─────┘
//!                  [pitch < -t, last=L] ──▶ BLINK_LEFT
//! ```

use super::context::{Direction, SignalContext};
use super::guards::GuardId;
use super::{SignalState, StateDescriptor, Transition};
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Transition rows (priority order)
// ═══════════════════════════════════════════════════════════════════════════

const INIT_TRANSITIONS: &[Transition] = &[Transition::new(GuardId::Always, SignalState::NormalOff)];

const NORMAL_OFF_TRANSITIONS: &[Transition] = &[
    Transition::new(GuardId::LeftSwitch, SignalState::BlinkLeft),
    Transition::new(GuardId::RightSwitch, SignalState::BlinkRight),
];

const BLINK_LEFT_TRANSITIONS: &[Transition] = &[
    Transition::new(GuardId::RightSwitch, SignalState::NormalOff),
    Transition::new(GuardId::HoldElapsed, SignalState::TemporaryOff),
];

const BLINK_RIGHT_TRANSITIONS: &[Transition] = &[
    Transition::new(GuardId::LeftSwitch, SignalState::NormalOff),
    Transition::new(GuardId::HoldElapsed, SignalState::TemporaryOff),
];

const TEMPORARY_OFF_TRANSITIONS: &[Transition] = &[
    Transition::new(GuardId::LeanRight, SignalState::BlinkRight),
    Transition::new(GuardId::LeanLeft, SignalState::BlinkLeft),
    Transition::new(GuardId::SwitchesReleased, SignalState::NormalOff),
];

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; SignalState::COUNT] {
    [
        // Index 0 — Init
        StateDescriptor {
            id: SignalState::Init,
            name: "Init",
            on_enter: init_enter,
            transitions: INIT_TRANSITIONS,
        },
        // Index 1 — NormalOff
        StateDescriptor {
            id: SignalState::NormalOff,
            name: "NormalOff",
            on_enter: normal_off_enter,
            transitions: NORMAL_OFF_TRANSITIONS,
        },
        // Index 2 — BlinkLeft
        StateDescriptor {
            id: SignalState::BlinkLeft,
            name: "BlinkLeft",
            on_enter: blink_left_enter,
            transitions: BLINK_LEFT_TRANSITIONS,
        },
        // Index 3 — BlinkRight
        StateDescriptor {
            id: SignalState::BlinkRight,
            name: "BlinkRight",
            on_enter: blink_right_enter,
            transitions: BLINK_RIGHT_TRANSITIONS,
        },
        // Index 4 — TemporaryOff
        StateDescriptor {
            id: SignalState::TemporaryOff,
            name: "TemporaryOff",
            on_enter: temporary_off_enter,
            transitions: TEMPORARY_OFF_TRANSITIONS,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Entry actions
// ═══════════════════════════════════════════════════════════════════════════

fn init_enter(ctx: &mut SignalContext) {
    ctx.lamp_on = false;
}

fn normal_off_enter(ctx: &mut SignalContext) {
    ctx.lamp_on = false;
    ctx.last_direction = Direction::None;
    info!("NORMAL_OFF: signal cleared");
}

fn blink_left_enter(ctx: &mut SignalContext) {
    ctx.lamp_on = true;
    ctx.last_direction = Direction::Left;
    info!("BLINK_LEFT: lamp on, pitch={:.1}°", ctx.pitch_deg);
}

fn blink_right_enter(ctx: &mut SignalContext) {
    ctx.lamp_on = true;
    ctx.last_direction = Direction::Right;
    info!("BLINK_RIGHT: lamp on, pitch={:.1}°", ctx.pitch_deg);
}

fn temporary_off_enter(ctx: &mut SignalContext) {
    // Direction is kept so the lean guards can resume the same side.
    ctx.lamp_on = false;
    info!(
        "TEMPORARY_OFF: paused after {}ms idle (last={:?})",
        ctx.ms_since_activity(),
        ctx.last_direction
    );
}
