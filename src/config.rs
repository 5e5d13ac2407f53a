//! Game configuration parameters
//!
//! Loop timing, debounce intervals and indicator effect tuning. Gesture
//! thresholds are not here: they are fixed constants in `game::resolver`
//! and `game::heat`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::game::Difficulty;

/// Core game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // --- Timing ---
    /// Main loop sleep between ticks (milliseconds)
    pub tick_interval_ms: u32,

    // --- Inputs ---
    /// Encoder line debounce interval (milliseconds)
    pub encoder_debounce_ms: u32,
    /// Button debounce interval (milliseconds)
    pub button_debounce_ms: u32,
    /// Encoder ticks per menu cursor step
    pub menu_ticks_per_step: i32,

    // --- Indicator ---
    /// Global indicator brightness (0-255, 255 = full)
    pub indicator_brightness: u8,
    /// Duration of the red flash on GAME OVER (milliseconds)
    pub lose_flash_ms: u32,
    /// Duration of the rainbow effect on WIN (milliseconds)
    pub win_effect_ms: u32,

    // --- Menu ---
    /// Difficulty highlighted on first boot
    pub default_difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Timing
            tick_interval_ms: 10, // ~100 Hz

            // Inputs
            encoder_debounce_ms: 2,
            button_debounce_ms: 20,
            menu_ticks_per_step: 2,

            // Indicator
            indicator_brightness: 77, // ≈ 0.3
            lose_flash_ms: 800,
            win_effect_ms: 3000,

            // Menu
            default_difficulty: Difficulty::Easy,
        }
    }
}

impl GameConfig {
    /// Reject values that would stall the loop or hide every effect.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick_interval_ms must be > 0"));
        }
        if self.menu_ticks_per_step <= 0 {
            return Err(Error::Config("menu_ticks_per_step must be > 0"));
        }
        if self.indicator_brightness == 0 {
            return Err(Error::Config("indicator_brightness must be > 0"));
        }
        if self.lose_flash_ms == 0 || self.win_effect_ms == 0 {
            return Err(Error::Config("effect durations must be > 0"));
        }
        Ok(())
    }

    /// `self` if valid, otherwise the defaults.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Invalid config ({e}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = GameConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.tick_interval_ms, 10);
        assert_eq!(c.menu_ticks_per_step, 2);
        assert_eq!(c.default_difficulty, Difficulty::Easy);
    }

    #[test]
    fn serde_roundtrip() {
        let c = GameConfig {
            indicator_brightness: 200,
            default_difficulty: Difficulty::Hard,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let c: GameConfig = serde_json::from_str(r#"{"win_effect_ms": 1500}"#).unwrap();
        assert_eq!(c.win_effect_ms, 1500);
        assert_eq!(c.lose_flash_ms, 800);
    }

    #[test]
    fn zero_values_are_rejected() {
        let cases = [
            GameConfig { tick_interval_ms: 0, ..GameConfig::default() },
            GameConfig { menu_ticks_per_step: 0, ..GameConfig::default() },
            GameConfig { indicator_brightness: 0, ..GameConfig::default() },
            GameConfig { win_effect_ms: 0, ..GameConfig::default() },
        ];
        for c in cases {
            assert!(matches!(c.validate(), Err(Error::Config(_))), "{c:?}");
        }
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let bad = GameConfig { tick_interval_ms: 0, ..GameConfig::default() };
        assert_eq!(bad.or_default(), GameConfig::default());
    }
}
