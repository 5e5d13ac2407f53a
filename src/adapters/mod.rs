//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements     | Connects to                     |
//! |-------------|----------------|---------------------------------|
//! | `hardware`  | InputPort      | Encoder / button GPIO, ADXL345  |
//! | `console`   | DisplayPort    | Serial log output               |
//! |             | IndicatorPort  |                                 |
//! | `log_sink`  | EventSink      | Serial log output               |
//! | `time`      | -              | ESP32 system timer              |

pub mod console;
pub mod hardware;
pub mod log_sink;
pub mod time;
