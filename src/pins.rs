//! GPIO / peripheral pin assignments for the game board (XIAO ESP32-C3).
//!
//! Single source of truth. Drivers and the binary reference this module
//! rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Rotary encoder (pull-ups, active low)
// ---------------------------------------------------------------------------

/// Encoder channel A (D1).
pub const ENCODER_A_GPIO: i32 = 3;
/// Encoder channel B (D2).
pub const ENCODER_B_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Push button (pull-up, pressed = LOW)
// ---------------------------------------------------------------------------

/// D9.
pub const BUTTON_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// I2C bus: SSD1306 OLED + ADXL345 accelerometer
// ---------------------------------------------------------------------------

/// D4.
pub const I2C_SDA_GPIO: i32 = 6;
/// D5.
pub const I2C_SCL_GPIO: i32 = 7;
/// Bus clock.
pub const I2C_FREQ_HZ: u32 = 400_000;

/// SSD1306 128x64 OLED.
pub const OLED_I2C_ADDR: u8 = 0x3C;
/// ADXL345 with SDO tied low.
pub const ADXL345_I2C_ADDR: u8 = 0x53;

// ---------------------------------------------------------------------------
// Indicator (single NeoPixel)
// ---------------------------------------------------------------------------

/// D0.
pub const PIXEL_GPIO: i32 = 2;
pub const NUM_PIXELS: usize = 1;
