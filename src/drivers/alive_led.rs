//! Heartbeat LED.
//!
//! Toggled from the main loop at a fixed period so a stalled loop is
//! visible on the bench.

use crate::drivers::hw_init;

pub struct AliveLed {
    gpio: i32,
    period_ms: u64,
    last_toggle_ms: u64,
    on: bool,
}

impl AliveLed {
    pub fn new(gpio: i32, period_ms: u64) -> Self {
        Self {
            gpio,
            period_ms,
            last_toggle_ms: 0,
            on: false,
        }
    }

    /// Toggle once `period_ms` has passed since the last toggle.
    /// Returns `true` if the LED changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_toggle_ms) < self.period_ms {
            return false;
        }
        self.on = !self.on;
        self.last_toggle_ms = now_ms;
        hw_init::gpio_write(self.gpio, self.on);
        true
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
