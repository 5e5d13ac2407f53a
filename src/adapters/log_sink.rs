//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured game events to the
//! ESP-IDF logger (UART / USB-CDC in production). End-of-game summaries
//! are written as one JSON object so a host can scrape them.

use log::{info, warn};

use crate::app::events::{GameEvent, GameSummary};
use crate::app::ports::EventSink;

/// Adapter that logs every [`GameEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn summary_json(summary: &GameSummary) -> String {
    serde_json::to_string(summary).unwrap_or_else(|e| {
        warn!("summary serialisation failed: {e}");
        String::from("{}")
    })
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started(state) => {
                info!("START | initial_state={:?}", state);
            }
            GameEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            GameEvent::StepStarted {
                number,
                total,
                action,
            } => {
                info!("STEP  | {}/{} {}", number, total, action.name());
            }
            GameEvent::StepConfirmed { action, score } => {
                info!("OK    | {} score={}", action.name(), score);
            }
            GameEvent::HeatLevelChanged { level, target } => {
                info!("HEAT  | now={} target={}", level.name(), target.name());
            }
            GameEvent::GameOver(summary) => {
                info!("LOSE  | {}", summary_json(summary));
            }
            GameEvent::GameWon(summary) => {
                info!("WIN   | {}", summary_json(summary));
            }
        }
    }
}
