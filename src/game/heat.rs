//! HEAT challenge: dial the encoder to a target level and hold it.
//!
//! ```text
//!            displacement from the baseline captured at step entry
//!   not yet moved:   0 → OFF      ≤ -1 → LOW*     ≥ +1 → HIGH*
//!   after moving:   ≤ -1 → LOW     0 → MID         ≥ +1 → HIGH
//!                                          (* sets `moved`, never cleared)
//! ```
//!
//! The first crossing is direction-asymmetric: the very first tick commits
//! a direction, and MID only exists once the dial has left centre.
//! Reaching the target starts a hold timer; leaving the target cancels it
//! with no partial credit.

use serde::{Deserialize, Serialize};

use crate::app::ports::TargetSource;

/// Encoder ticks away from the baseline needed to leave centre.
pub const HEAT_TICKS_REQUIRED: i32 = 1;
/// How long the target level must be held continuously.
pub const HEAT_HOLD_MS: u32 = 1200;
/// HEAT steps ignore the difficulty budget and use this instead.
pub const HEAT_TIMEOUT_MS: u32 = 9000;
/// Minimum gap between live-level redraws.
pub const HEAT_DRAW_THROTTLE_MS: u32 = 120;
/// How long the "HEAT OK!" screen stays up before the next step starts.
pub const HEAT_CLEAR_SHOW_MS: u32 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeatLevel {
    /// Dial has not left centre yet.
    #[default]
    Off,
    Low,
    Mid,
    High,
}

impl HeatLevel {
    /// Targets are drawn from these, in this order.
    pub const TARGETS: [HeatLevel; 3] = [Self::Low, Self::Mid, Self::High];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "--",
            Self::Low => "LOW",
            Self::Mid => "MID",
            Self::High => "HIGH",
        }
    }
}

/// Default target strategy: whole seconds of uptime modulo 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTargetSource;

impl TargetSource for ClockTargetSource {
    fn next_target(&mut self, now_ms: u32) -> HeatLevel {
        HeatLevel::TARGETS[(now_ms / 1000) as usize % HeatLevel::TARGETS.len()]
    }
}

/// Always picks the same target.
#[derive(Debug, Clone, Copy)]
pub struct FixedTarget(pub HeatLevel);

impl TargetSource for FixedTarget {
    fn next_target(&mut self, _now_ms: u32) -> HeatLevel {
        self.0
    }
}

/// Progress of the hold on the target level, as seen by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldPhase {
    /// Not on target.
    Idle,
    /// Target reached on this tick.
    Started,
    Holding,
    /// Held long enough; the challenge is complete.
    Cleared,
}

/// What one [`HeatChallenge::update`] observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatTick {
    pub level: HeatLevel,
    /// The level differs from the previous tick.
    pub changed: bool,
    /// The change passed the redraw throttle.
    pub redraw: bool,
    pub hold: HoldPhase,
}

#[derive(Debug, Clone)]
pub struct HeatChallenge {
    target: HeatLevel,
    level: HeatLevel,
    baseline: i32,
    moved: bool,
    hold_since: Option<u32>,
    last_draw_ms: Option<u32>,
    cleared_at: Option<u32>,
}

impl HeatChallenge {
    /// `target` must be one of [`HeatLevel::TARGETS`]; `Off` is mapped to MID.
    pub fn new(target: HeatLevel, encoder_position: i32) -> Self {
        let target = if target == HeatLevel::Off {
            HeatLevel::Mid
        } else {
            target
        };
        Self {
            target,
            level: HeatLevel::Off,
            baseline: encoder_position,
            moved: false,
            hold_since: None,
            last_draw_ms: None,
            cleared_at: None,
        }
    }

    pub fn update(&mut self, now_ms: u32, encoder_position: i32) -> HeatTick {
        let displacement = encoder_position.wrapping_sub(self.baseline);
        let prev = self.level;

        self.level = if self.moved {
            if displacement <= -HEAT_TICKS_REQUIRED {
                HeatLevel::Low
            } else if displacement >= HEAT_TICKS_REQUIRED {
                HeatLevel::High
            } else {
                HeatLevel::Mid
            }
        } else if displacement.abs() < HEAT_TICKS_REQUIRED {
            HeatLevel::Off
        } else {
            self.moved = true;
            if displacement < 0 {
                HeatLevel::Low
            } else {
                HeatLevel::High
            }
        };

        let changed = self.level != prev;
        let redraw = changed
            && self
                .last_draw_ms
                .is_none_or(|t| now_ms.wrapping_sub(t) > HEAT_DRAW_THROTTLE_MS);
        if redraw {
            self.last_draw_ms = Some(now_ms);
        }

        let hold = self.update_hold(now_ms);

        HeatTick {
            level: self.level,
            changed,
            redraw,
            hold,
        }
    }

    fn update_hold(&mut self, now_ms: u32) -> HoldPhase {
        if self.level != self.target {
            self.hold_since = None;
            return HoldPhase::Idle;
        }

        match self.hold_since {
            None => {
                self.hold_since = Some(now_ms);
                HoldPhase::Started
            }
            Some(since) if now_ms.wrapping_sub(since) >= HEAT_HOLD_MS => {
                self.hold_since = None;
                self.cleared_at = Some(now_ms);
                HoldPhase::Cleared
            }
            Some(_) => HoldPhase::Holding,
        }
    }

    pub fn target(&self) -> HeatLevel {
        self.target
    }

    pub fn level(&self) -> HeatLevel {
        self.level
    }

    pub fn has_moved_away_from_center(&self) -> bool {
        self.moved
    }

    /// Timestamp at which the hold completed, if it has.
    pub fn cleared_at(&self) -> Option<u32> {
        self.cleared_at
    }
}
