//! CookGame firmware library.
//!
//! Exposes the pure game logic for integration testing and host
//! simulation. ESP-IDF-specific code is guarded by the `espidf` feature
//! within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod game;
pub mod pins;
pub mod sensors;
