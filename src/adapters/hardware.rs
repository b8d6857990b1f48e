//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the MPU6050, the switch pair, and the lamp, exposing them through
//! [`MotionSensorPort`], [`SwitchPort`], and [`LampPort`].  On
//! non-espidf targets the GPIO drivers use the simulated pin bank, and
//! the accelerometer can sit on any `embedded-hal` I²C implementation.

use embedded_hal::i2c::I2c;

use crate::app::ports::{LampPort, MotionSensorPort, SwitchLevels, SwitchPort};
use crate::control::orientation::AccelSample;
use crate::drivers::lamp::Lamp;
use crate::drivers::switches::SwitchPair;
use crate::error::SensorError;
use crate::sensors::mpu6050::Mpu6050;

/// Concrete adapter that combines all control-loop hardware behind port traits.
pub struct HardwareAdapter<I2C> {
    mpu: Mpu6050<I2C>,
    switches: SwitchPair,
    lamp: Lamp,
}

impl<I2C: I2c> HardwareAdapter<I2C> {
    pub fn new(mpu: Mpu6050<I2C>, switches: SwitchPair, lamp: Lamp) -> Self {
        Self {
            mpu,
            switches,
            lamp,
        }
    }
}

// ── MotionSensorPort ──────────────────────────────────────────

impl<I2C: I2c> MotionSensorPort for HardwareAdapter<I2C> {
    fn read_accel(&mut self) -> Result<AccelSample, SensorError> {
        self.mpu.read_accel()
    }
}

// ── SwitchPort ────────────────────────────────────────────────

impl<I2C: I2c> SwitchPort for HardwareAdapter<I2C> {
    fn read_levels(&mut self) -> SwitchLevels {
        self.switches.read()
    }
}

// ── LampPort ──────────────────────────────────────────────────

impl<I2C: I2c> LampPort for HardwareAdapter<I2C> {
    fn set_lamp(&mut self, on: bool) {
        self.lamp.set(on);
    }

    fn is_lamp_on(&self) -> bool {
        self.lamp.is_on()
    }
}
