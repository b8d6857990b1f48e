//! LeanSignal Firmware — Main Entry Point
//!
//! Hexagonal architecture with a fixed-period polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter          LogEventSink      SystemClock        │
//! │  (Motion+Switch+Lamp)     UartTelemetry     (ClockPort)        │
//! │                           LogDisplay                           │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              SignalService (pure logic)                │    │
//! │  │  OrientationEstimator · FSM                            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::{error, info};

use leansignal::adapters::hardware::HardwareAdapter;
use leansignal::adapters::log_display::LogDisplay;
use leansignal::adapters::log_sink::{LogEventSink, TeeSink};
use leansignal::adapters::time::SystemClock;
use leansignal::adapters::uart_telemetry::UartTelemetrySink;
use leansignal::app::events::AppEvent;
use leansignal::app::ports::{ClockPort, EventSink};
use leansignal::app::service::SignalService;
use leansignal::config::SignalConfig;
use leansignal::drivers::alive_led::AliveLed;
use leansignal::drivers::lamp::Lamp;
use leansignal::drivers::switches::SwitchPair;
use leansignal::error::Error;
use leansignal::pins;
use leansignal::sensors::mpu6050::{DEFAULT_ADDRESS, Mpu6050};

/// Heartbeat LED half-period.
const ALIVE_PERIOD_MS: u64 = 1_000;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  LeanSignal v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = SignalConfig::default();
    config.validate().map_err(Error::from)?;

    // ── 2. GPIO ───────────────────────────────────────────────
    if let Err(e) = leansignal::drivers::hw_init::init_peripherals() {
        fatal(e.into());
    }

    // ── 3. Accelerometer on I²C0 ──────────────────────────────
    let peripherals = Peripherals::take()?;
    let i2c_config = I2cConfig::new().baudrate(Hertz(pins::I2C_FREQ_HZ));
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio21,
        peripherals.pins.gpio22,
        &i2c_config,
    )?;
    let mut mpu = Mpu6050::new(i2c, DEFAULT_ADDRESS);
    if let Err(e) = mpu.init() {
        // Without tilt data the controller cannot cancel signals; stay
        // dark rather than run half-blind.
        fatal(e.into());
    }

    // ── 4. Adapters + service ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        mpu,
        SwitchPair::new(pins::SIGNAL_LEFT_GPIO, pins::SIGNAL_RIGHT_GPIO),
        Lamp::new(pins::LAMP_GPIO),
    );
    let clock = SystemClock::new();
    let mut sink = TeeSink {
        first: LogEventSink::new(),
        second: UartTelemetrySink::new(std::io::stdout()),
    };
    let mut display = LogDisplay::new();
    let mut alive = AliveLed::new(pins::ALIVE_LED_GPIO, ALIVE_PERIOD_MS);

    let mut service = SignalService::new(config.clone());
    service.start(&mut hw, &mut sink);

    info!(
        "Entering control loop: poll={}ms hold={}ms lean={:.1}°",
        config.poll_interval_ms, config.hold_duration_ms, config.lean_threshold_deg
    );
    if config.telemetry_enabled {
        info!("Telemetry streaming on console; text logging off");
    }
    log::set_max_level(config.console_log_level());

    // ── 5. Control loop ───────────────────────────────────────
    let poll_ms = u64::from(config.poll_interval_ms);
    let mut last_telemetry_ms = 0u64;
    let mut last_display_ms = 0u64;

    loop {
        let started_ms = clock.now_ms();

        service.tick(&mut hw, &clock, &mut sink);

        let now_ms = clock.now_ms();
        if config.telemetry_enabled
            && now_ms.saturating_sub(last_telemetry_ms) >= u64::from(config.telemetry_interval_ms)
        {
            sink.emit(&AppEvent::Telemetry(service.build_telemetry()));
            last_telemetry_ms = now_ms;
        }
        if now_ms.saturating_sub(last_display_ms) >= u64::from(config.display_interval_ms) {
            service.refresh_display(&mut display);
            last_display_ms = now_ms;
        }
        alive.tick(now_ms);

        let elapsed = clock.now_ms().saturating_sub(started_ms);
        std::thread::sleep(Duration::from_millis(poll_ms.saturating_sub(elapsed)));
    }
}

/// Log a bring-up failure and park the main task; the task watchdog
/// reports the stall.
fn fatal(e: Error) -> ! {
    error!("{} — halting", e);
    loop {
        std::thread::sleep(Duration::from_secs(1));
    }
}
