//! ADXL345 3-axis accelerometer over I2C.
//!
//! Configured for full-resolution ±16 g, where every range has the same
//! 4 mg/LSB scale. Readings are returned in m/s².

use embedded_hal::i2c::I2c;
use log::{info, warn};

use crate::error::{self, SensorError};
use crate::sensors::gesture::{AccelReading, STANDARD_GRAVITY};

/// Register map (subset).
mod reg {
    pub const DEVID: u8 = 0x00;
    pub const BW_RATE: u8 = 0x2C;
    pub const POWER_CTL: u8 = 0x2D;
    pub const DATA_FORMAT: u8 = 0x31;
    pub const DATAX0: u8 = 0x32;
}

const DEVICE_ID: u8 = 0xE5;
/// Measure bit.
const POWER_CTL_MEASURE: u8 = 0x08;
/// FULL_RES | range ±16 g.
const DATA_FORMAT_FULL_RES_16G: u8 = 0x0B;
/// 100 Hz output data rate.
const BW_RATE_100HZ: u8 = 0x0A;
const G_PER_LSB: f32 = 0.004;

pub struct Adxl345<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Adxl345<I2C> {
    /// Probe the device and enable measurement mode.
    pub fn new(i2c: I2C, address: u8) -> error::Result<Self> {
        let mut dev = Self { i2c, address };

        let id = dev.read_register(reg::DEVID)?;
        if id != DEVICE_ID {
            warn!("ADXL345 @0x{address:02X}: unexpected DEVID 0x{id:02X}");
            return Err(SensorError::NotDetected.into());
        }

        dev.write_register(reg::BW_RATE, BW_RATE_100HZ)?;
        dev.write_register(reg::DATA_FORMAT, DATA_FORMAT_FULL_RES_16G)?;
        dev.write_register(reg::POWER_CTL, POWER_CTL_MEASURE)?;
        info!("ADXL345 @0x{address:02X} measuring");
        Ok(dev)
    }

    /// One acceleration sample in m/s².
    pub fn read(&mut self) -> Result<AccelReading, SensorError> {
        let mut buf = [0u8; 6];
        self.i2c
            .write_read(self.address, &[reg::DATAX0], &mut buf)
            .map_err(|_| SensorError::BusFailed)?;

        let axis = |lo: u8, hi: u8| {
            f32::from(i16::from_le_bytes([lo, hi])) * G_PER_LSB * STANDARD_GRAVITY
        };
        Ok(AccelReading::new(
            axis(buf[0], buf[1]),
            axis(buf[2], buf[3]),
            axis(buf[4], buf[5]),
        ))
    }

    fn read_register(&mut self, register: u8) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(|_| SensorError::BusFailed)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(|_| SensorError::BusFailed)
    }
}
