//! Table-driven finite state machine engine.
//!
//! Classic embedded FSM pattern ported to Rust:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  StateTable                                                   │
//! │  ┌──────────────┬───────────┬─────────────────────────────┐   │
//! │  │ SignalState  │ on_enter  │ transitions (ordered)       │   │
//! │  ├──────────────┼───────────┼─────────────────────────────┤   │
//! │  │ Init         │ fn(ctx)   │ [(Always, NormalOff)]       │   │
//! │  │ NormalOff    │ fn(ctx)   │ [(LeftSwitch, BlinkLeft),…] │   │
//! │  │ BlinkLeft    │ fn(ctx)   │ [(RightSwitch, NormalOff),…]│   │
//! │  │ BlinkRight   │ fn(ctx)   │ [(LeftSwitch, NormalOff),…] │   │
//! │  │ TemporaryOff │ fn(ctx)   │ [(LeanRight, BlinkRight),…] │   │
//! │  └──────────────┴───────────┴─────────────────────────────┘   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine walks the **current** state's transition list in
//! order.  The first guard that returns `true` wins: the engine updates
//! the current pointer and runs the destination's `on_enter` in the same
//! call.  If no guard fires, nothing changes.  All functions receive
//! `&mut SignalContext`, which holds the tick inputs, lamp command, timing
//! marks, and config.

pub mod context;
pub mod guards;
pub mod states;

use context::SignalContext;
use guards::GuardId;
use log::info;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all signal states.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignalState {
    Init = 0,
    NormalOff = 1,
    BlinkLeft = 2,
    BlinkRight = 3,
    TemporaryOff = 4,
}

impl SignalState {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 5;
}

// ---------------------------------------------------------------------------
// Table rows
// ---------------------------------------------------------------------------

/// Signature for entry actions.  Runs exactly once per transition.
pub type StateActionFn = fn(&mut SignalContext);

/// One `(guard, destination)` pair in a state's ordered exit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub guard: GuardId,
    pub to: SignalState,
}

impl Transition {
    pub const fn new(guard: GuardId, to: SignalState) -> Self {
        Self { guard, to }
    }
}

/// Static descriptor for a single FSM state.
/// Stored in a fixed-size array — no heap, no `dyn`.
pub struct StateDescriptor {
    pub id: SignalState,
    pub name: &'static str,
    pub on_enter: StateActionFn,
    pub transitions: &'static [Transition],
}

/// A transition taken by [`Fsm::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub from: SignalState,
    pub to: SignalState,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
///
/// Owns the state table (array of [`StateDescriptor`]); the mutable
/// [`SignalContext`] is threaded through every call by the owner.
pub struct Fsm {
    /// Fixed-size table indexed by `SignalState as usize`.
    table: [StateDescriptor; SignalState::COUNT],
    /// Index of the currently active state.
    current: usize,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; SignalState::COUNT], initial: SignalState) -> Self {
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `run()`.
    pub fn start(&mut self, ctx: &mut SignalContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        (self.table[self.current].on_enter)(ctx);
    }

    /// Advance the FSM by one tick.
    ///
    /// Evaluates the current state's guards in order and applies at most
    /// one transition, entry action included.  Returns the transition
    /// taken, if any.
    pub fn run(&mut self, ctx: &mut SignalContext) -> Option<StateChange> {
        let next = self.table[self.current]
            .transitions
            .iter()
            .find(|t| t.guard.evaluate(ctx))
            .map(|t| t.to)?;

        let from = self.current_state();
        self.transition(next, ctx);
        Some(StateChange { from, to: next })
    }

    /// Jump straight to `next`, running its entry action (test setup and
    /// bench diagnostics).  A no-op when already in `next`.
    pub fn force_transition(&mut self, next: SignalState, ctx: &mut SignalContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
        }
    }

    /// The current state's identity.
    pub fn current_state(&self) -> SignalState {
        self.table[self.current].id
    }

    /// Human-readable name of the current state.
    pub fn current_name(&self) -> &'static str {
        self.table[self.current].name
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next: SignalState, ctx: &mut SignalContext) {
        let next_idx = next as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        self.current = next_idx;

        (self.table[self.current].on_enter)(ctx);
    }
}
