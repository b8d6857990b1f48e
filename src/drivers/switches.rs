//! Left/right signal switch inputs.
//!
//! ## Hardware
//!
//! Two momentary switches, each on its own GPIO with an external pull
//! resistor.  The driver reports raw line levels only; which level means
//! "pressed" is a deployment setting applied by the service
//! ([`ActiveLevel`](crate::config::ActiveLevel)).  No debouncing happens
//! here: the FSM's release guard does the only debouncing the system needs.

use crate::app::ports::SwitchLevels;
use crate::drivers::hw_init;

pub struct SwitchPair {
    left_gpio: i32,
    right_gpio: i32,
}

impl SwitchPair {
    pub fn new(left_gpio: i32, right_gpio: i32) -> Self {
        Self {
            left_gpio,
            right_gpio,
        }
    }

    /// Sample both lines.
    pub fn read(&self) -> SwitchLevels {
        SwitchLevels {
            left_high: hw_init::gpio_read(self.left_gpio),
            right_high: hw_init::gpio_read(self.right_gpio),
        }
    }
}
