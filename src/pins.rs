//! GPIO / peripheral pin assignments for the signal controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Signal switches (momentary, external pull-down → active HIGH by default)
// ---------------------------------------------------------------------------

/// Right-turn switch input.
pub const SIGNAL_RIGHT_GPIO: i32 = 13;
/// Left-turn switch input.
pub const SIGNAL_LEFT_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Indicator lamp / flasher relay drive (HIGH = on).
pub const LAMP_GPIO: i32 = 15;
/// Heartbeat LED, toggled once per second while the loop is alive.
pub const ALIVE_LED_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// I²C bus (MPU6050 accelerometer, SSD1306 display)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 21;
pub const I2C_SCL_GPIO: i32 = 22;
/// Bus clock (Hz).  Both devices support fast mode.
pub const I2C_FREQ_HZ: u32 = 400_000;
