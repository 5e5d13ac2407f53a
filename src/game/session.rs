//! One play-through: recipe progress, score, and the step timers.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::heat::HEAT_CLEAR_SHOW_MS;
use super::recipe::{Action, Difficulty, Recipe};

/// Gesture evaluation is suppressed this long after any step change.
pub const STEP_SETTLE_MS: u32 = 200;

/// Why a session ended in GAME_OVER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// A non-HEAT step ran past the difficulty time limit.
    TimeOut,
    HeatTimeout,
    /// Shook the device during an ADD step.
    WrongMove,
}

impl GameOverReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TimeOut => "TIME OUT",
            Self::HeatTimeout => "HEAT TIMEOUT",
            Self::WrongMove => "WRONG MOVE",
        }
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the post-HEAT confirmation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationHold {
    /// No confirmation screen pending.
    Inactive,
    /// Still showing; the game is frozen.
    Showing,
    /// The hold just ran out on this tick.
    Expired,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    recipe: Recipe,
    step_index: usize,
    score: u32,
    step_start_ms: u32,
    last_step_change_ms: u32,
    confirmation_since: Option<u32>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, now_ms: u32) -> Self {
        Self {
            difficulty,
            recipe: difficulty.recipe(),
            step_index: 0,
            score: 0,
            step_start_ms: now_ms,
            last_step_change_ms: now_ms,
            confirmation_since: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn recipe(&self) -> Recipe {
        self.recipe
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// 1-based step number for display, capped at the recipe length.
    pub fn step_number(&self) -> usize {
        (self.step_index + 1).min(self.recipe.len())
    }

    pub fn total_steps(&self) -> usize {
        self.recipe.len()
    }

    /// `None` once every step has been completed.
    pub fn current_action(&self) -> Option<Action> {
        self.recipe.get(self.step_index)
    }

    pub fn is_complete(&self) -> bool {
        self.step_index >= self.recipe.len()
    }

    pub fn time_limit_ms(&self) -> u32 {
        self.difficulty.time_limit_ms()
    }

    pub fn step_start_ms(&self) -> u32 {
        self.step_start_ms
    }

    /// Award the current step's points and move to the next step.
    /// Returns the new score.
    pub fn award_step(&mut self) -> u32 {
        debug_assert!(!self.is_complete(), "award past end of recipe");
        self.score = self.score.saturating_add(self.difficulty.points());
        self.step_index = (self.step_index + 1).min(self.recipe.len());
        self.score
    }

    /// Restart both step timers at `now_ms`.
    pub fn stamp_step(&mut self, now_ms: u32) {
        self.step_start_ms = now_ms;
        self.last_step_change_ms = now_ms;
    }

    pub fn step_elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.step_start_ms)
    }

    /// The generic per-step budget is exceeded.
    pub fn step_timed_out(&self, now_ms: u32) -> bool {
        self.step_elapsed(now_ms) > self.time_limit_ms()
    }

    /// Still inside the post-step-change settle window.
    pub fn settling(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_step_change_ms) < STEP_SETTLE_MS
    }

    /// Freeze the game behind the "HEAT OK!" screen starting at `now_ms`.
    pub fn hold_confirmation(&mut self, now_ms: u32) {
        self.confirmation_since = Some(now_ms);
    }

    /// Poll the confirmation hold; on expiry the hold is cleared.
    pub fn poll_confirmation(&mut self, now_ms: u32) -> ConfirmationHold {
        match self.confirmation_since {
            None => ConfirmationHold::Inactive,
            Some(since) if now_ms.wrapping_sub(since) < HEAT_CLEAR_SHOW_MS => {
                ConfirmationHold::Showing
            }
            Some(_) => {
                self.confirmation_since = None;
                ConfirmationHold::Expired
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Score never decreases and equals steps × points.
        #[test]
        fn score_is_monotonic(d in 0usize..3, steps in 0usize..20) {
            let difficulty = Difficulty::from_index(d);
            let mut s = GameSession::new(difficulty, 0);
            let n = steps.min(s.total_steps());
            let mut prev = 0;
            for _ in 0..n {
                let score = s.award_step();
                prop_assert!(score > prev);
                prev = score;
            }
            prop_assert_eq!(s.score(), n as u32 * difficulty.points());
        }
    }
}
