//! Application core: pure game orchestration, zero I/O.
//!
//! The FSM, gesture resolver and indicator engine are driven from
//! [`service::GameService`]. All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod screen;
pub mod service;
