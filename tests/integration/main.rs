//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that plays whole games through
//! [`GameService`](cookgame::app::service::GameService) against mock
//! adapters. All tests run on the host with no real hardware required.

mod game_flow_tests;
mod heat_flow_tests;
mod mock_hw;
