//! GPIO drivers and one-shot hardware initialisation.

pub mod alive_led;
pub mod hw_init;
pub mod lamp;
pub mod switches;
