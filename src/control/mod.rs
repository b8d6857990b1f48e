//! Numeric control blocks fed by the sensor layer.

pub mod orientation;
