//! Integration tests for the switches → estimator → FSM → lamp pipeline.
//!
//! Each test scripts a short ride against the mock board, ticking the
//! service at the default 20 ms poll interval.

use crate::mock_hw::{
    LEAN_LEFT, LEAN_RIGHT, ManualClock, MockBoard, MockMpuBus, RecordingDisplay, RecordingSink,
    UPRIGHT,
};

use leansignal::adapters::hardware::HardwareAdapter;
use leansignal::adapters::uart_telemetry::UartTelemetrySink;
use leansignal::app::events::AppEvent;
use leansignal::app::service::SignalService;
use leansignal::config::SignalConfig;
use leansignal::drivers::hw_init::sim;
use leansignal::drivers::lamp::Lamp;
use leansignal::drivers::switches::SwitchPair;
use leansignal::error::SensorError;
use leansignal::fsm::SignalState;
use leansignal::fsm::context::Direction;
use leansignal::sensors::mpu6050::{DEFAULT_ADDRESS, Mpu6050};
use leansignal::telemetry::decode_frame;

const POLL_MS: u64 = 20;

struct Rig {
    svc: SignalService,
    board: MockBoard,
    clock: ManualClock,
    sink: RecordingSink,
}

impl Rig {
    /// Started service, already ticked once into `NormalOff` at t = 0.
    fn new() -> Self {
        let mut rig = Self {
            svc: SignalService::new(SignalConfig::default()),
            board: MockBoard::new(),
            clock: ManualClock::new(0),
            sink: RecordingSink::new(),
        };
        rig.svc.start(&mut rig.board, &mut rig.sink);
        rig.tick_now();
        assert_eq!(rig.svc.state(), SignalState::NormalOff);
        rig
    }

    fn tick_now(&mut self) {
        self.svc.tick(&mut self.board, &self.clock, &mut self.sink);
    }

    fn step(&mut self) {
        self.clock.advance(POLL_MS);
        self.tick_now();
    }

    /// Step until the clock reads `until_ms` (inclusive).
    fn step_until(&mut self, until_ms: u64) {
        while self.clock_ms() < until_ms {
            self.step();
        }
    }

    fn clock_ms(&self) -> u64 {
        use leansignal::app::ports::ClockPort;
        self.clock.now_ms()
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn boot_settles_in_normal_off_with_lamp_dark() {
    let rig = Rig::new();
    assert!(!rig.board.lamp);
    assert_eq!(rig.svc.last_direction(), Direction::None);
    assert_eq!(rig.sink.events[0], AppEvent::Started(SignalState::Init));
    assert_eq!(
        rig.sink.events[1],
        AppEvent::StateChanged {
            from: SignalState::Init,
            to: SignalState::NormalOff
        }
    );
}

// ── Switch activation and cancellation ────────────────────────

#[test]
fn opposite_switch_cancels_then_reactivates_next_tick() {
    let mut rig = Rig::new();

    rig.board.press_right(true);
    rig.step();
    assert_eq!(rig.svc.state(), SignalState::BlinkRight);
    assert!(rig.board.lamp);

    rig.board.press_right(false);
    rig.board.press_left(true);
    rig.step();
    assert_eq!(rig.svc.state(), SignalState::NormalOff);
    assert!(!rig.board.lamp);

    rig.step();
    assert_eq!(rig.svc.state(), SignalState::BlinkLeft);
    assert!(rig.board.lamp);
    assert_eq!(rig.svc.last_direction(), Direction::Left);
}

#[test]
fn same_switch_held_keeps_blinking_until_hold_elapses() {
    let mut rig = Rig::new();
    rig.board.press_left(true);
    rig.step(); // t = 20, activity stamped
    assert_eq!(rig.svc.state(), SignalState::BlinkLeft);

    rig.step_until(20 + 3_000);
    assert_eq!(rig.svc.state(), SignalState::BlinkLeft);

    rig.step();
    assert_eq!(rig.svc.state(), SignalState::TemporaryOff);
    assert!(!rig.board.lamp);
}

// ── Release debounce ──────────────────────────────────────────

#[test]
fn upright_release_returns_to_normal_after_debounce() {
    let mut rig = Rig::new();
    rig.board.press_right(true);
    rig.step();
    rig.board.release_all();
    rig.step_until(20 + 3_000 + POLL_MS);
    assert_eq!(rig.svc.state(), SignalState::TemporaryOff);

    for _ in 0..9 {
        rig.step();
        assert_eq!(rig.svc.state(), SignalState::TemporaryOff);
    }
    rig.step();
    assert_eq!(rig.svc.state(), SignalState::NormalOff);
    assert!(!rig.board.lamp);
    assert_eq!(rig.svc.last_direction(), Direction::None);
}

#[test]
fn lean_against_last_direction_does_not_rearm() {
    let mut rig = Rig::new();
    rig.board.press_right(true);
    rig.step();
    rig.board.release_all();
    rig.board.accel = Ok(LEAN_LEFT);
    rig.step_until(20 + 3_000 + POLL_MS);
    assert_eq!(rig.svc.state(), SignalState::TemporaryOff);
    assert!(rig.svc.angles().pitch < -15.0);

    for _ in 0..10 {
        rig.step();
    }
    assert_eq!(rig.svc.state(), SignalState::NormalOff);
}

// ── Lean re-arm ───────────────────────────────────────────────

#[test]
fn leaning_into_right_turn_rearms_signal() {
    let mut rig = Rig::new();
    rig.board.accel = Ok(LEAN_RIGHT);
    rig.board.press_right(true);
    rig.step();
    rig.board.release_all();

    rig.step_until(20 + 3_000 + POLL_MS);
    assert_eq!(rig.svc.state(), SignalState::TemporaryOff);
    assert!(rig.svc.angles().pitch > 15.0);

    // Lean is checked before the release debounce.
    rig.step();
    assert_eq!(rig.svc.state(), SignalState::BlinkRight);
    assert!(rig.board.lamp);

    // Entering BlinkRight does not stamp activity, so the hold is still
    // expired: while the lean lasts the lamp toggles every tick.
    let mut trace = Vec::new();
    for _ in 0..6 {
        rig.step();
        trace.push((rig.svc.state(), rig.board.lamp));
    }
    let expected: Vec<_> = [
        (SignalState::TemporaryOff, false),
        (SignalState::BlinkRight, true),
    ]
    .into_iter()
    .cycle()
    .take(6)
    .collect();
    assert_eq!(trace, expected);

    // Straightening up lets the release debounce end it.
    rig.board.accel = Ok(UPRIGHT);
    for _ in 0..300 {
        rig.step();
        if rig.svc.state() == SignalState::NormalOff {
            break;
        }
    }
    assert_eq!(rig.svc.state(), SignalState::NormalOff);
    assert!(!rig.board.lamp);
}

#[test]
fn full_left_turn_ends_in_normal_off_once_upright_and_released() {
    let mut rig = Rig::new();
    rig.board.accel = Ok(LEAN_LEFT);
    rig.board.press_left(true);
    rig.step();
    rig.step_until(20 + 3_000 + POLL_MS);
    assert_eq!(rig.svc.state(), SignalState::TemporaryOff);

    rig.step();
    assert_eq!(rig.svc.state(), SignalState::BlinkLeft);

    // Straighten up and let go.
    rig.board.accel = Ok(UPRIGHT);
    rig.board.release_all();
    for _ in 0..300 {
        rig.step();
        if rig.svc.state() == SignalState::NormalOff {
            break;
        }
    }
    assert_eq!(rig.svc.state(), SignalState::NormalOff);
    assert!(!rig.board.lamp);
    assert_eq!(rig.board.lamp_writes.last(), Some(&false));
}

// ── Sensor faults ─────────────────────────────────────────────

#[test]
fn sensor_fault_does_not_block_switches() {
    let mut rig = Rig::new();
    rig.board.accel = Err(SensorError::Bus);
    rig.step();
    rig.step();
    rig.board.press_left(true);
    rig.step();
    assert_eq!(rig.svc.state(), SignalState::BlinkLeft);
    assert_eq!(rig.sink.count(|e| *e == AppEvent::SensorFault), 1);

    // A recovery followed by a new fault reports again.
    rig.board.accel = Ok(UPRIGHT);
    rig.step();
    rig.board.accel = Err(SensorError::NotReady);
    rig.step();
    assert_eq!(rig.sink.count(|e| *e == AppEvent::SensorFault), 2);
}

// ── Telemetry and display ─────────────────────────────────────

#[test]
fn telemetry_frame_carries_truncated_angles() {
    let mut rig = Rig::new();
    rig.board.accel = Ok(LEAN_RIGHT);
    for _ in 0..100 {
        rig.step();
    }
    let angles = rig.svc.angles();

    let mut uart = UartTelemetrySink::new(Vec::new());
    leansignal::app::ports::EventSink::emit(
        &mut uart,
        &AppEvent::Telemetry(rig.svc.build_telemetry()),
    );
    let bytes = uart.into_inner();
    assert_eq!(
        decode_frame(&bytes),
        Ok((angles.roll as i32, angles.pitch as i32))
    );
    assert_eq!(angles.pitch as i32, 29);
}

#[test]
fn display_shows_roll_and_pitch_lines() {
    let mut rig = Rig::new();
    rig.board.accel = Ok(LEAN_LEFT);
    rig.step();

    let mut display = RecordingDisplay::default();
    rig.svc.refresh_display(&mut display);
    let screen = &display.screens[0];
    assert_eq!(screen.len(), 2);
    assert!(screen[0].starts_with("Roll value: "));
    assert!(screen[1].starts_with("Pitch value: -"));
}

// ── Real drivers on simulated pins ────────────────────────────

#[test]
fn hardware_adapter_drives_sim_pins() {
    // Pins outside the board map so no other test touches them.
    const LEFT: i32 = 50;
    const RIGHT: i32 = 51;
    const LAMP: i32 = 52;

    let mut mpu = Mpu6050::new(MockMpuBus::new(UPRIGHT), DEFAULT_ADDRESS);
    mpu.init().unwrap();
    let mut hw = HardwareAdapter::new(mpu, SwitchPair::new(LEFT, RIGHT), Lamp::new(LAMP));

    let mut svc = SignalService::new(SignalConfig::default());
    let clock = ManualClock::new(0);
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink);
    svc.tick(&mut hw, &clock, &mut sink);
    assert!(!sim::level(LAMP));

    sim::set_level(LEFT, true);
    clock.advance(POLL_MS);
    svc.tick(&mut hw, &clock, &mut sink);
    assert_eq!(svc.state(), SignalState::BlinkLeft);
    assert!(sim::level(LAMP));

    sim::set_level(LEFT, false);
    sim::set_level(RIGHT, true);
    clock.advance(POLL_MS);
    svc.tick(&mut hw, &clock, &mut sink);
    assert_eq!(svc.state(), SignalState::NormalOff);
    assert!(!sim::level(LAMP));
    sim::set_level(RIGHT, false);
}
