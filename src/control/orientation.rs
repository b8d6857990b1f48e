//! Accelerometer-only tilt estimator.
//!
//! Converts each raw acceleration vector into roll and pitch with the
//! gravity-vector arctangent formulation, then smooths both through a
//! fixed-weight single-pole low-pass filter:
//!
//! ```text
//! raw_roll  = atan( y / sqrt(x² + z²))      [deg]
//! raw_pitch = atan(-x / sqrt(y² + z²))      [deg]
//! roll      = w · roll  + (1 - w) · raw_roll
//! pitch     = w · pitch + (1 - w) · raw_pitch      (w = 0.94)
//! ```
//!
//! At w = 0.94 the time constant is roughly 16 control ticks. There is no
//! gyro fusion: sustained linear acceleration biases the estimate, which is
//! accepted for turn-signal purposes.

/// One raw accelerometer reading, in sensor units (g for the MPU6050).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Filtered orientation in degrees. Both angles stay within [-90, +90].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilteredAngles {
    /// Rotation about the X axis.
    pub roll: f32,
    /// Rotation about the Y axis; positive = leaning right.
    pub pitch: f32,
}

/// Weight of the previous estimate used by the shipped firmware.
pub const DEFAULT_FILTER_WEIGHT: f32 = 0.94;

pub struct OrientationEstimator {
    weight: f32,
    angles: FilteredAngles,
}

impl Default for OrientationEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER_WEIGHT)
    }
}

impl OrientationEstimator {
    /// `weight` is the share kept from the previous estimate, in [0, 1).
    /// A non-finite weight falls back to [`DEFAULT_FILTER_WEIGHT`].
    pub fn new(weight: f32) -> Self {
        Self {
            weight: if weight.is_finite() {
                weight.clamp(0.0, 1.0)
            } else {
                DEFAULT_FILTER_WEIGHT
            },
            angles: FilteredAngles::default(),
        }
    }

    /// Fold one sample into the filtered estimate.
    ///
    /// A zero-magnitude vector has no defined direction, so the previous
    /// angles are held instead of feeding NaN into the filter.
    pub fn update(&mut self, sample: AccelSample) {
        let Some((raw_roll, raw_pitch)) = raw_angles(sample) else {
            return;
        };

        let w = self.weight;
        self.angles.roll = w * self.angles.roll + (1.0 - w) * raw_roll;
        self.angles.pitch = w * self.angles.pitch + (1.0 - w) * raw_pitch;
    }

    pub fn roll(&self) -> f32 {
        self.angles.roll
    }

    pub fn pitch(&self) -> f32 {
        self.angles.pitch
    }

    pub fn angles(&self) -> FilteredAngles {
        self.angles
    }
}

/// Unfiltered (roll, pitch) in degrees, or `None` when the vector is
/// degenerate (all zero or non-finite).
pub fn raw_angles(s: AccelSample) -> Option<(f32, f32)> {
    let roll = (s.y / (s.x * s.x + s.z * s.z).sqrt()).atan().to_degrees();
    let pitch = (-s.x / (s.y * s.y + s.z * s.z).sqrt()).atan().to_degrees();

    (roll.is_finite() && pitch.is_finite()).then_some((roll, pitch))
}
