//! Sensor drivers.
//!
//! The only sensor on the board is the MPU6050 tilt sensor; it is wrapped
//! by [`HardwareAdapter`](crate::adapters::hardware::HardwareAdapter) and
//! reached by the domain through
//! [`MotionSensorPort`](crate::app::ports::MotionSensorPort).

pub mod mpu6050;
