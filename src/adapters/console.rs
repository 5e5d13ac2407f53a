//! Serial console output adapter.
//!
//! Implements [`DisplayPort`] and [`IndicatorPort`] by logging what the
//! OLED and the NeoPixel would show.

use log::{debug, info};

use crate::app::ports::{DisplayPort, IndicatorPort};
use crate::app::screen::Screen;
use crate::drivers::indicator::Rgb;

/// Stands in for the SSD1306 display and the NeoPixel until dedicated
/// adapters exist.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayPort for ConsoleOutput {
    fn render(&mut self, screen: &Screen) {
        info!("OLED  | {}", screen);
    }
}

impl IndicatorPort for ConsoleOutput {
    fn set_colour(&mut self, (r, g, b): Rgb) {
        debug!("PIXEL | #{r:02X}{g:02X}{b:02X}");
    }
}
