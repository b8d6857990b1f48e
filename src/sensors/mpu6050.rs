//! MPU6050 accelerometer over I²C.
//!
//! Only the accelerometer is used.  Register setup mirrors the board's
//! bring-up sequence: no sample-rate divider, DLPF off, ±500 °/s gyro,
//! ±2 g accel, PLL on the X gyro as clock source.
//!
//! Generic over [`embedded_hal::i2c::I2c`], so the same driver runs on
//! `esp-idf-hal`'s `I2cDriver` and on a mock bus in tests.

use embedded_hal::i2c::I2c;
use log::info;

use crate::control::orientation::AccelSample;
use crate::error::SensorError;

/// 7-bit address with AD0 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x68;
/// WHO_AM_I reset value.
pub const DEVICE_ID: u8 = 0x68;

const REG_SMPLRT_DIV: u8 = 0x19;
const REG_CONFIG: u8 = 0x1A;
const REG_GYRO_CONFIG: u8 = 0x1B;
const REG_ACCEL_CONFIG: u8 = 0x1C;
const REG_ACCEL_XOUT_H: u8 = 0x3B;
const REG_PWR_MGMT_1: u8 = 0x6B;
const REG_WHO_AM_I: u8 = 0x75;

/// LSB per g at the ±2 g full-scale range.
const ACCEL_LSB_PER_G: f32 = 16_384.0;

pub struct Mpu6050<I2C> {
    i2c: I2C,
    address: u8,
    ready: bool,
}

impl<I2C: I2c> Mpu6050<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            ready: false,
        }
    }

    /// Verify the device id and configure ranges.  Must succeed before
    /// [`read_accel`](Self::read_accel) returns data.
    pub fn init(&mut self) -> Result<(), SensorError> {
        let id = self.read_register(REG_WHO_AM_I)?;
        if id != DEVICE_ID {
            return Err(SensorError::WrongDevice(id));
        }

        for (reg, value) in [
            (REG_SMPLRT_DIV, 0x00),
            (REG_CONFIG, 0x00),
            (REG_GYRO_CONFIG, 0x08),
            (REG_ACCEL_CONFIG, 0x00),
            (REG_PWR_MGMT_1, 0x01),
        ] {
            self.write_register(reg, value)?;
        }

        self.ready = true;
        info!("MPU6050 @0x{:02x}: ready (±2g)", self.address);
        Ok(())
    }

    /// Burst-read the three accel axes, converted to g.
    pub fn read_accel(&mut self) -> Result<AccelSample, SensorError> {
        if !self.ready {
            return Err(SensorError::NotReady);
        }

        let mut buf = [0u8; 6];
        self.i2c
            .write_read(self.address, &[REG_ACCEL_XOUT_H], &mut buf)
            .map_err(|_| SensorError::Bus)?;

        let axis = |hi: u8, lo: u8| f32::from(i16::from_be_bytes([hi, lo])) / ACCEL_LSB_PER_G;
        Ok(AccelSample::new(
            axis(buf[0], buf[1]),
            axis(buf[2], buf[3]),
            axis(buf[4], buf[5]),
        ))
    }

    /// Hand the bus back (e.g. to share it with the display).
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, SensorError> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut value)
            .map_err(|_| SensorError::Bus)?;
        Ok(value[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|_| SensorError::Bus)
    }
}
