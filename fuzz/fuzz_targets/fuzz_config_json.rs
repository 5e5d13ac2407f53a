//! Fuzz target: `GameConfig` JSON parsing
//!
//! Feeds arbitrary bytes to `serde_json` and verifies:
//! - Parsing never panics
//! - `or_default()` always yields a config that validates
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use cookgame::config::GameConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = serde_json::from_slice::<GameConfig>(data) {
        let config = config.or_default();
        assert!(config.validate().is_ok());
    }
});
