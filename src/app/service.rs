//! Application service — the hexagonal core.
//!
//! [`SignalService`] owns the orientation estimator, the signal FSM, and
//! the shared context.  It exposes a clean, hardware-agnostic API.  All
//! I/O flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!  MotionSensorPort ──▶ ┌─────────────────────────┐ ──▶ EventSink
//!  SwitchPort ────────▶ │      SignalService      │ ──▶ DisplayPort
//!  ClockPort ─────────▶ │  Estimator · FSM        │
//!            LampPort ◀─└─────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::SignalConfig;
use crate::control::orientation::{FilteredAngles, OrientationEstimator};
use crate::fsm::context::{Direction, SignalContext, SwitchInputs};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, SignalState};

use super::display::status_lines;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ClockPort, DisplayPort, EventSink, LampPort, MotionSensorPort, SwitchPort};

// ───────────────────────────────────────────────────────────────
// SignalService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct SignalService {
    fsm: Fsm,
    ctx: SignalContext,
    estimator: OrientationEstimator,
    tick_count: u64,
    /// Consecutive ticks whose accelerometer read failed.
    sensor_fault_ticks: u32,
}

impl SignalService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the FSM — call [`start`](Self::start) next.
    pub fn new(config: SignalConfig) -> Self {
        let estimator = OrientationEstimator::new(config.filter_weight);
        let ctx = SignalContext::new(config);
        let fsm = Fsm::new(build_state_table(), SignalState::Init);

        Self {
            fsm,
            ctx,
            estimator,
            tick_count: 0,
            sensor_fault_ticks: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Run the Init entry action and drive the lamp to its initial level.
    pub fn start(&mut self, lamp: &mut impl LampPort, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        lamp.set_lamp(self.ctx.lamp_on);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("SignalService started in {}", self.fsm.current_name());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control cycle: estimator → switches → FSM → lamp.
    ///
    /// The `hw` parameter satisfies the sensor, switch, and lamp ports
    /// together — this avoids a triple mutable borrow while keeping the
    /// port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl MotionSensorPort + SwitchPort + LampPort),
        clock: &impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Refresh the tilt estimate.  A failed read is a skipped sample:
        //    the filter keeps its previous angles.
        match hw.read_accel() {
            Ok(sample) => {
                if self.sensor_fault_ticks > 0 {
                    info!(
                        "Motion sensor recovered after {} ticks",
                        self.sensor_fault_ticks
                    );
                    self.sensor_fault_ticks = 0;
                }
                self.estimator.update(sample);
            }
            Err(e) => {
                if self.sensor_fault_ticks == 0 {
                    warn!("Motion sensor read failed: {}", e);
                    sink.emit(&AppEvent::SensorFault);
                }
                self.sensor_fault_ticks = self.sensor_fault_ticks.saturating_add(1);
            }
        }

        // 2. Latch this tick's inputs into the context.
        let levels = hw.read_levels();
        let active = self.ctx.config.switch_active_level;
        self.ctx.switches = SwitchInputs {
            left: active.is_asserted(levels.left_high),
            right: active.is_asserted(levels.right_high),
        };
        self.ctx.pitch_deg = self.estimator.pitch();
        self.ctx.now_ms = clock.now_ms();

        debug!(
            "tick {} | roll={:.2} pitch={:.2} | L={} R={}",
            self.tick_count,
            self.estimator.roll(),
            self.ctx.pitch_deg,
            self.ctx.switches.left,
            self.ctx.switches.right
        );

        // 3. FSM run (pure state logic); 4. lamp written on entry only.
        if let Some(change) = self.fsm.run(&mut self.ctx) {
            lamp_write(hw, self.ctx.lamp_on);
            sink.emit(&AppEvent::StateChanged {
                from: change.from,
                to: change.to,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        let angles = self.estimator.angles();
        TelemetryData {
            state: self.fsm.current_state(),
            roll_deg: angles.roll,
            pitch_deg: angles.pitch,
            lamp_on: self.ctx.lamp_on,
            last_direction: self.ctx.last_direction,
        }
    }

    /// Push the roll/pitch status text to the display.
    pub fn refresh_display(&self, display: &mut impl DisplayPort) {
        let lines = status_lines(self.estimator.angles());
        display.show_lines(&[lines[0].as_str(), lines[1].as_str()]);
    }

    /// Current FSM state.
    pub fn state(&self) -> SignalState {
        self.fsm.current_state()
    }

    /// Current filtered orientation.
    pub fn angles(&self) -> FilteredAngles {
        self.estimator.angles()
    }

    /// Direction most recently signalled.
    pub fn last_direction(&self) -> Direction {
        self.ctx.last_direction
    }

    /// Lamp level requested by the FSM.
    pub fn lamp_on(&self) -> bool {
        self.ctx.lamp_on
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Active configuration.
    pub fn config(&self) -> &SignalConfig {
        &self.ctx.config
    }
}

fn lamp_write(lamp: &mut impl LampPort, on: bool) {
    if lamp.is_lamp_on() != on {
        debug!("Lamp -> {}", if on { "ON" } else { "OFF" });
    }
    lamp.set_lamp(on);
}
