//! Outbound game events.
//!
//! The [`GameService`](super::service::GameService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them; the firmware only logs them.

use serde::Serialize;

use crate::fsm::StateId;
use crate::game::{Action, Difficulty, GameOverReason, GameSession, HeatLevel};

/// Structured events emitted by the game core.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The service has started (carries initial state).
    Started(StateId),

    /// The FSM transitioned between states.
    StateChanged { from: StateId, to: StateId },

    /// A step prompt is now showing. `number` is 1-based.
    StepStarted {
        number: usize,
        total: usize,
        action: Action,
    },

    /// The expected action was performed.
    StepConfirmed { action: Action, score: u32 },

    /// The live HEAT level moved.
    HeatLevelChanged { level: HeatLevel, target: HeatLevel },

    GameOver(GameSummary),

    GameWon(GameSummary),
}

/// End-of-session snapshot, logged as one JSON line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub difficulty: Difficulty,
    pub score: u32,
    pub steps_completed: usize,
    pub total_steps: usize,
    pub reason: Option<GameOverReason>,
}

impl GameSummary {
    pub fn from_session(session: &GameSession, reason: Option<GameOverReason>) -> Self {
        Self {
            difficulty: session.difficulty(),
            score: session.score(),
            steps_completed: session.step_index(),
            total_steps: session.total_steps(),
            reason,
        }
    }
}
