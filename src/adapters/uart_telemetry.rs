//! PC telemetry stream adapter.
//!
//! Writes one [`encode_frame`] frame per [`AppEvent::Telemetry`] to any
//! byte writer.  On the board this is the console UART (stdout); in tests
//! it is a `Vec<u8>`.  Other events are ignored.

use std::io::Write;

use log::warn;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::control::orientation::FilteredAngles;
use crate::telemetry::encode_frame;

pub struct UartTelemetrySink<W: Write> {
    out: W,
    frames_sent: u32,
    write_errors: u32,
}

impl<W: Write> UartTelemetrySink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames_sent: 0,
            write_errors: 0,
        }
    }

    pub fn frames_sent(&self) -> u32 {
        self.frames_sent
    }

    pub fn write_errors(&self) -> u32 {
        self.write_errors
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for UartTelemetrySink<W> {
    fn emit(&mut self, event: &AppEvent) {
        let AppEvent::Telemetry(t) = event else {
            return;
        };

        let frame = encode_frame(FilteredAngles {
            roll: t.roll_deg,
            pitch: t.pitch_deg,
        });
        match self.out.write_all(&frame).and_then(|()| self.out.flush()) {
            Ok(()) => self.frames_sent = self.frames_sent.wrapping_add(1),
            Err(e) => {
                // Only the first failure of a run is logged.
                if self.write_errors == 0 {
                    warn!("telemetry write failed: {}", e);
                }
                self.write_errors = self.write_errors.saturating_add(1);
            }
        }
    }
}
