//! Display adapter that prints the status screen to the log.
//!
//! Stands in for the character display on boards that do not fit one;
//! lines go out at debug level so they stay quiet in release builds.

use log::debug;

use crate::app::ports::DisplayPort;

#[derive(Default)]
pub struct LogDisplay {
    refreshes: u32,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refreshes(&self) -> u32 {
        self.refreshes
    }
}

impl DisplayPort for LogDisplay {
    fn show_lines(&mut self, lines: &[&str]) {
        self.refreshes = self.refreshes.wrapping_add(1);
        for line in lines {
            debug!("DISP | {}", line);
        }
    }
}
