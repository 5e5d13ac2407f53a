//! Peripheral drivers and output effect generators.

pub mod adxl345;
pub mod debounce;
pub mod indicator;
