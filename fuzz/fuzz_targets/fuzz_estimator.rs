//! Fuzz target: `OrientationEstimator::update`
//!
//! Interprets the input as a stream of little-endian f32 triples (any bit
//! pattern, NaN and infinities included) and checks that the filtered
//! angles never leave the finite ±90° range.
//!
//! cargo fuzz run fuzz_estimator

#![no_main]

use libfuzzer_sys::fuzz_target;
use leansignal::control::orientation::{AccelSample, OrientationEstimator};

fuzz_target!(|data: &[u8]| {
    let mut est = OrientationEstimator::default();

    for chunk in data.chunks_exact(12) {
        let f = |i: usize| f32::from_le_bytes([chunk[i], chunk[i + 1], chunk[i + 2], chunk[i + 3]]);
        est.update(AccelSample::new(f(0), f(4), f(8)));

        let a = est.angles();
        assert!(a.roll.is_finite() && a.pitch.is_finite());
        assert!(a.roll.abs() <= 90.0 + 1e-3 && a.pitch.abs() <= 90.0 + 1e-3);
    }
});
