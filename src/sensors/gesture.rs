//! Acceleration magnitude sampler.
//!
//! Turns one 3-axis reading into a scalar magnitude and the absolute
//! change since the previous sample. The first sample after a baseline
//! reset only seeds the baseline: it reports no delta, so a fresh
//! baseline can never produce a phantom spike.
//!
//! A failed or non-finite read is replaced by the last good reading (or
//! a device-at-rest reading if none arrived yet). Holding the value
//! yields a zero delta, which no gesture threshold accepts. The first good
//! reading after an outage only re-seeds the baseline, since the held
//! value it would be compared against may be stale.

use log::{info, warn};

use crate::error::SensorError;

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f32 = 9.806_65;

/// One accelerometer reading in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccelReading {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelReading {
    /// Device lying flat and still.
    pub const REST: Self = Self {
        x: 0.0,
        y: 0.0,
        z: STANDARD_GRAVITY,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Output of one [`GestureSampler::sample`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// The reading actually used (possibly a held value).
    pub reading: AccelReading,
    pub magnitude: f32,
    /// `None` when this sample only established the baseline.
    pub delta: Option<f32>,
}

#[derive(Debug, Default)]
pub struct GestureSampler {
    last_magnitude: Option<f32>,
    last_good: Option<AccelReading>,
    in_outage: bool,
}

impl GestureSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, raw: Result<AccelReading, SensorError>) -> GestureSample {
        let reading = self.accept(raw);
        let magnitude = reading.magnitude();
        let delta = self.last_magnitude.map(|last| (magnitude - last).abs());
        self.last_magnitude = Some(magnitude);
        GestureSample {
            reading,
            magnitude,
            delta,
        }
    }

    /// Re-seed the baseline from a fresh reading (used at step entry).
    pub fn reset_baseline(&mut self, raw: Result<AccelReading, SensorError>) {
        let reading = self.accept(raw);
        self.last_magnitude = Some(reading.magnitude());
    }

    /// Forget the baseline; the next sample becomes baseline-only.
    fn clear_baseline(&mut self) {
        self.last_magnitude = None;
    }

    fn accept(&mut self, raw: Result<AccelReading, SensorError>) -> AccelReading {
        let checked = raw.and_then(|r| {
            if r.is_finite() {
                Ok(r)
            } else {
                Err(SensorError::OutOfRange)
            }
        });

        match checked {
            Ok(reading) => {
                if self.in_outage {
                    info!("Accelerometer recovered");
                    self.in_outage = false;
                    self.clear_baseline();
                }
                self.last_good = Some(reading);
                reading
            }
            Err(e) => {
                if !self.in_outage {
                    warn!("Accelerometer read failed ({e}), holding last reading");
                    self.in_outage = true;
                }
                self.last_good.unwrap_or(AccelReading::REST)
            }
        }
    }
}
