//! Hardware adapter: bridges the real input peripherals to [`InputPort`].
//!
//! Owns the debounced encoder lines, the debounced push button and the
//! accelerometer. Generic over the `embedded_hal` traits so the same code
//! runs against ESP-IDF drivers on the device and fakes on the host.

use embedded_hal::digital::InputPin;
use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::ports::{InputFrame, InputPort};
use crate::config::GameConfig;
use crate::drivers::adxl345::Adxl345;
use crate::drivers::debounce::Debouncer;
use crate::error::SensorError;

/// Concrete adapter that combines all input hardware behind [`InputPort`].
pub struct HardwareAdapter<A, B, BTN, I2C> {
    encoder_a: Debouncer<A>,
    encoder_b: Debouncer<B>,
    button: Debouncer<BTN>,
    /// `None` when the accelerometer did not answer at boot.
    accel: Option<Adxl345<I2C>>,
}

impl<A, B, BTN, I2C> HardwareAdapter<A, B, BTN, I2C>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
    I2C: I2c,
{
    pub fn new(
        encoder_a: A,
        encoder_b: B,
        button: BTN,
        accel: Option<Adxl345<I2C>>,
        config: &GameConfig,
        now_ms: u32,
    ) -> Self {
        if accel.is_none() {
            warn!("No accelerometer: MIX, TILT and wrong-move checks stay idle");
        }
        Self {
            encoder_a: Debouncer::new(encoder_a, config.encoder_debounce_ms, now_ms),
            encoder_b: Debouncer::new(encoder_b, config.encoder_debounce_ms, now_ms),
            button: Debouncer::new(button, config.button_debounce_ms, now_ms),
            accel,
        }
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<A, B, BTN, I2C> InputPort for HardwareAdapter<A, B, BTN, I2C>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
    I2C: I2c,
{
    fn read_inputs(&mut self, now_ms: u32) -> InputFrame {
        self.encoder_a.update(now_ms);
        self.encoder_b.update(now_ms);
        self.button.update(now_ms);

        let accel = match self.accel.as_mut() {
            Some(dev) => dev.read(),
            None => Err(SensorError::NotDetected),
        };

        InputFrame {
            encoder_a: self.encoder_a.value(),
            encoder_b: self.encoder_b.value(),
            // Active low with pull-up.
            button_pressed: !self.button.value(),
            accel,
        }
    }
}
