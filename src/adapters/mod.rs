//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter          | Implements         | Connects to                 |
//! |------------------|--------------------|-----------------------------|
//! | `hardware`       | MotionSensorPort   | MPU6050 over I²C            |
//! |                  | SwitchPort         | ESP32 GPIO inputs           |
//! |                  | LampPort           | ESP32 GPIO output           |
//! | `log_sink`       | EventSink          | Serial log output           |
//! | `log_display`    | DisplayPort        | Serial log output (debug)   |
//! | `time`           | ClockPort          | ESP32 system timer          |
//! | `uart_telemetry` | EventSink          | PC plotter frames on UART   |

pub mod hardware;
pub mod log_display;
pub mod log_sink;
pub mod time;
pub mod uart_telemetry;
