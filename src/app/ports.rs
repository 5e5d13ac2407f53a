//! Port traits: the hexagonal boundary between game logic and the device.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ GameService (domain)
//! ```
//!
//! Driven adapters (buttons, encoder, accelerometer, OLED, NeoPixel, event
//! sinks) implement these traits. The [`GameService`](super::service::GameService)
//! consumes them via generics, so the game core never touches hardware
//! directly.

use crate::drivers::indicator::Rgb;
use crate::error::SensorError;
use crate::game::HeatLevel;
use crate::sensors::gesture::AccelReading;

use super::events::GameEvent;
use super::screen::Screen;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Every raw input for one tick.
#[derive(Debug, Clone, Copy)]
pub struct InputFrame {
    /// Debounced encoder line A (`true` = high).
    pub encoder_a: bool,
    /// Debounced encoder line B (`true` = high).
    pub encoder_b: bool,
    /// Debounced button, already inverted from the active-low line.
    pub button_pressed: bool,
    pub accel: Result<AccelReading, SensorError>,
}

impl Default for InputFrame {
    /// Idle lines, button released, device at rest.
    fn default() -> Self {
        Self {
            encoder_a: true,
            encoder_b: true,
            button_pressed: false,
            accel: Ok(AccelReading::REST),
        }
    }
}

/// Read-side port: the domain calls this once per tick.
pub trait InputPort {
    fn read_inputs(&mut self, now_ms: u32) -> InputFrame;
}

// ───────────────────────────────────────────────────────────────
// Output ports (driven adapters: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Text display. Fire-and-forget.
pub trait DisplayPort {
    fn render(&mut self, screen: &Screen);
}

/// Single RGB indicator light.
pub trait IndicatorPort {
    fn set_colour(&mut self, colour: Rgb);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`GameEvent`]s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

// ───────────────────────────────────────────────────────────────
// Target source (HEAT challenge randomness)
// ───────────────────────────────────────────────────────────────

/// Picks the HEAT target level at the start of each HEAT step.
pub trait TargetSource {
    fn next_target(&mut self, now_ms: u32) -> HeatLevel;
}
