//! Indicator lamp driver.
//!
//! A single digital output drives the flasher relay; the relay does the
//! actual blinking, so "on" here means "signal active".
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via hw_init.
//! On host/test: writes the simulated pin bank.

use crate::drivers::hw_init;

pub struct Lamp {
    gpio: i32,
    on: bool,
}

impl Lamp {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
