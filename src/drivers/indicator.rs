//! Indicator effect engine for the single NeoPixel.
//!
//! Generates the colour for the current tick. Nothing here blocks: the
//! win and lose effects are timed against `now_ms` and fall back to off
//! once their duration has elapsed.
//!
//! | Mode        | Output                                   | Ends after       |
//! |-------------|------------------------------------------|------------------|
//! | Off         | black                                    | -                |
//! | Level       | solid colour per heat level (OFF = black)| -                |
//! | LoseFlash   | solid red                                | `lose_flash_ms`  |
//! | WinRainbow  | colour wheel, hue +5 every 20 ms         | `win_effect_ms`  |
//!
//! Every output is scaled by the configured brightness.

use crate::config::GameConfig;
use crate::game::HeatLevel;

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

pub const COLOUR_OFF: Rgb = (0, 0, 0);
pub const COLOUR_LOW: Rgb = (0, 0, 255); // Blue
pub const COLOUR_MID: Rgb = (255, 180, 0); // Orange
pub const COLOUR_HIGH: Rgb = (179, 46, 46); // Red
pub const COLOUR_LOSE: Rgb = (255, 0, 0);

const RAINBOW_STEP_MS: u32 = 20;
const RAINBOW_HUE_STEP: u32 = 5;

/// What the indicator should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorMode {
    Off,
    Level(HeatLevel),
    LoseFlash,
    WinRainbow,
}

pub const fn level_colour(level: HeatLevel) -> Rgb {
    match level {
        HeatLevel::Off => COLOUR_OFF,
        HeatLevel::Low => COLOUR_LOW,
        HeatLevel::Mid => COLOUR_MID,
        HeatLevel::High => COLOUR_HIGH,
    }
}

/// Classic 0–255 colour wheel: red → green → blue → red.
pub fn colour_wheel(pos: u8) -> Rgb {
    let pos = pos as u16;
    if pos < 85 {
        ((255 - pos * 3) as u8, (pos * 3) as u8, 0)
    } else if pos < 170 {
        let p = pos - 85;
        (0, (255 - p * 3) as u8, (p * 3) as u8)
    } else {
        let p = pos - 170;
        ((p * 3) as u8, 0, (255 - p * 3) as u8)
    }
}

pub struct IndicatorEngine {
    mode: IndicatorMode,
    since_ms: u32,
    brightness: u8,
    lose_flash_ms: u32,
    win_effect_ms: u32,
}

impl IndicatorEngine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            mode: IndicatorMode::Off,
            since_ms: 0,
            brightness: config.indicator_brightness,
            lose_flash_ms: config.lose_flash_ms,
            win_effect_ms: config.win_effect_ms,
        }
    }

    pub fn set_mode(&mut self, mode: IndicatorMode, now_ms: u32) {
        self.mode = mode;
        self.since_ms = now_ms;
    }

    pub fn mode(&self) -> IndicatorMode {
        self.mode
    }

    /// Advance timed effects and return the output colour.
    pub fn tick(&mut self, now_ms: u32) -> Rgb {
        let elapsed = now_ms.wrapping_sub(self.since_ms);

        let raw = match self.mode {
            IndicatorMode::Off => COLOUR_OFF,
            IndicatorMode::Level(level) => level_colour(level),
            IndicatorMode::LoseFlash if elapsed < self.lose_flash_ms => COLOUR_LOSE,
            IndicatorMode::WinRainbow if elapsed < self.win_effect_ms => {
                let hue = (elapsed / RAINBOW_STEP_MS).wrapping_mul(RAINBOW_HUE_STEP) & 0xFF;
                colour_wheel(hue as u8)
            }
            IndicatorMode::LoseFlash | IndicatorMode::WinRainbow => {
                self.mode = IndicatorMode::Off;
                COLOUR_OFF
            }
        };

        Self::scale(raw, self.brightness)
    }

    fn scale((r, g, b): Rgb, brightness: u8) -> Rgb {
        let br = brightness as u16;
        (
            ((r as u16 * br) / 255) as u8,
            ((g as u16 * br) / 255) as u8,
            ((b as u16 * br) / 255) as u8,
        )
    }
}
