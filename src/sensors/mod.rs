//! Input interpretation. Turns debounced lines and raw accelerometer
//! readings into the quantities the game logic reasons about.
//!
//! - [`encoder::EncoderTracker`]: signed dial position.
//! - [`gesture::GestureSampler`]: acceleration magnitude and its
//!   frame-to-frame delta.

pub mod encoder;
pub mod gesture;
