//! Fuzz target: `telemetry::decode_frame`
//!
//! Feeds arbitrary byte sequences to the telemetry frame decoder and
//! asserts that it never panics, and that anything it accepts survives
//! a re-encode unchanged.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use leansignal::control::orientation::FilteredAngles;
use leansignal::telemetry::{FRAME_LEN, decode_frame, encode_frame};

fuzz_target!(|data: &[u8]| {
    let Ok((roll, pitch)) = decode_frame(data) else {
        return;
    };

    // Whole degrees up to ±2^24 are exact in f32.
    if roll.unsigned_abs() < (1 << 24) && pitch.unsigned_abs() < (1 << 24) {
        let frame = encode_frame(FilteredAngles {
            roll: roll as f32,
            pitch: pitch as f32,
        });
        assert_eq!(&frame[..], &data[..FRAME_LEN]);
    }
});
