//! CookGame Firmware: Main Entry Point
//!
//! Hexagonal architecture driven by a fixed-cadence polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter   ConsoleOutput      LogEventSink             │
//! │  (InputPort)       (Display+Pixel)    (EventSink)              │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              GameService (pure logic)                  │    │
//! │  │  FSM · ActionResolver · IndicatorEngine                │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  MonotonicClock · FreeRTOS delay                               │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::{info, warn};

use cookgame::adapters::console::ConsoleOutput;
use cookgame::adapters::hardware::HardwareAdapter;
use cookgame::adapters::log_sink::LogEventSink;
use cookgame::adapters::time::MonotonicClock;
use cookgame::app::service::GameService;
use cookgame::config::GameConfig;
use cookgame::drivers::adxl345::Adxl345;
use cookgame::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("CookGame v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::default();
    let clock = MonotonicClock::new();
    let peripherals = Peripherals::take()?;

    // ── 2. Inputs: encoder + button (pull-ups, active low) ────
    let mut encoder_a = PinDriver::input(peripherals.pins.gpio3)?;
    encoder_a.set_pull(Pull::Up)?;
    let mut encoder_b = PinDriver::input(peripherals.pins.gpio4)?;
    encoder_b.set_pull(Pull::Up)?;
    let mut button = PinDriver::input(peripherals.pins.gpio9)?;
    button.set_pull(Pull::Up)?;
    info!(
        "Encoder on GPIO{}/GPIO{}, button on GPIO{}",
        pins::ENCODER_A_GPIO,
        pins::ENCODER_B_GPIO,
        pins::BUTTON_GPIO
    );

    // ── 3. I2C bus + accelerometer ────────────────────────────
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio6,
        peripherals.pins.gpio7,
        &I2cConfig::new().baudrate(Hertz(pins::I2C_FREQ_HZ)),
    )?;
    info!(
        "I2C on SDA GPIO{} / SCL GPIO{}",
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO
    );
    let accel = match Adxl345::new(i2c, pins::ADXL345_I2C_ADDR) {
        Ok(dev) => Some(dev),
        Err(e) => {
            warn!("ADXL345 init failed ({e}), continuing without gestures");
            None
        }
    };

    // ── 4. Wire adapters to the service ───────────────────────
    let mut inputs = HardwareAdapter::new(
        encoder_a,
        encoder_b,
        button,
        accel,
        &config,
        clock.now_ms(),
    );
    let mut outputs = ConsoleOutput::new();
    let mut sink = LogEventSink::new();
    let tick_interval_ms = config.tick_interval_ms;
    let mut game = GameService::new(config);

    game.start(clock.now_ms(), &mut outputs, &mut sink);

    // ── 5. Main loop ──────────────────────────────────────────
    loop {
        game.tick(clock.now_ms(), &mut inputs, &mut outputs, &mut sink);
        FreeRtos::delay_ms(tick_interval_ms);
    }
}
