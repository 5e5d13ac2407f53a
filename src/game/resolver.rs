//! Action resolver: classifies raw gesture input against the action the
//! current step expects.
//!
//! ```text
//!   ADD   button falling edge ─────────────────────────▶ Confirmed
//!         (NORMAL/HARD, after 600 ms) delta > 5.5 ─────▶ WrongMove(Shake)
//!   MIX   ≥2 spikes < 250 ms apart, 800 ms cooldown ───▶ Confirmed
//!   TILT  |x| > 6.5 held > 400 ms, 800 ms cooldown ────▶ Confirmed
//!   HEAT  HeatChallenge cleared ───────────────────────▶ Confirmed
//!         > 9000 ms since step start ──────────────────▶ TimedOut(Heat)
//! ```
//!
//! MIX and TILT are additionally gated by a 400 ms action lock stamped by
//! every confirmed or penalised action. The button path is never locked.
//!
//! The accelerometer is sampled lazily: only when a path actually needs a
//! magnitude delta. Skipped ticks therefore never advance the baseline.

use log::{debug, warn};

use crate::app::ports::TargetSource;
use crate::error::SensorError;
use crate::sensors::gesture::{AccelReading, GestureSampler};

use super::heat::{HEAT_TIMEOUT_MS, HeatChallenge, HeatTick, HoldPhase};
use super::recipe::{Action, Difficulty};

/// Magnitude delta that counts as a shake spike.
pub const SHAKE_THRESHOLD: f32 = 5.5;
/// |x| acceleration that counts as tilted.
pub const TILT_THRESHOLD: f32 = 6.5;
/// No MIX/TILT evaluation within this long of the last action.
pub const ACTION_LOCK_MS: u32 = 400;
/// Minimum gap between two confirmed MIX (or two confirmed TILT) actions.
pub const COOLDOWN_MS: u32 = 800;
/// Two spikes closer than this belong to the same mixing burst.
pub const MIX_SPIKE_WINDOW_MS: u32 = 250;
/// Tilt must be held strictly longer than this.
pub const TILT_HOLD_MS: u32 = 400;
/// ADD ignores shaking for this long after step entry.
pub const ADD_SHAKE_GRACE_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrongMoveKind {
    /// Shook the device while an ingredient was expected.
    Shake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutKind {
    Heat,
}

/// Outcome of evaluating one tick against the expected action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing decisive happened.
    Pending,
    Confirmed(Action),
    WrongMove(WrongMoveKind),
    TimedOut(TimeoutKind),
}

/// Everything the resolver needs from one tick.
#[derive(Debug, Clone, Copy)]
pub struct ResolveFrame {
    pub now_ms: u32,
    pub step_start_ms: u32,
    pub difficulty: Difficulty,
    pub encoder_position: i32,
    /// Debounced button went from released to pressed this tick.
    pub button_fell: bool,
    pub accel: Result<AccelReading, SensorError>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub resolution: Resolution,
    /// Present on HEAT steps so the caller can update display/indicator.
    pub heat: Option<HeatTick>,
}

impl From<Resolution> for Evaluation {
    fn from(resolution: Resolution) -> Self {
        Self {
            resolution,
            heat: None,
        }
    }
}

/// Gesture state that outlives a single tick.
///
/// Cooldowns and the action lock persist across steps within a session;
/// per-step state (baseline, tilt hold, spike count, HEAT challenge) is
/// reset by [`ActionResolver::begin_step`].
#[derive(Debug, Default)]
pub struct ActionResolver {
    sampler: GestureSampler,
    last_action_ms: Option<u32>,

    spike_count: u8,
    last_spike_ms: Option<u32>,
    last_shake_ms: Option<u32>,

    tilt_hold_since: Option<u32>,
    last_tilt_ms: Option<u32>,

    heat: Option<HeatChallenge>,
}

impl ActionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare for a new step: capture baselines and, for HEAT, draw a target.
    pub fn begin_step(
        &mut self,
        action: Action,
        now_ms: u32,
        encoder_position: i32,
        accel: Result<AccelReading, SensorError>,
        targets: &mut dyn TargetSource,
    ) {
        self.sampler.reset_baseline(accel);
        self.tilt_hold_since = None;
        self.spike_count = 0;
        self.heat = match action {
            Action::Heat => {
                let target = targets.next_target(now_ms);
                debug!("HEAT target {} from encoder {}", target.name(), encoder_position);
                Some(HeatChallenge::new(target, encoder_position))
            }
            _ => None,
        };
    }

    /// The live HEAT challenge, if the current step is HEAT.
    pub fn heat(&self) -> Option<&HeatChallenge> {
        self.heat.as_ref()
    }

    pub fn resolve(&mut self, expected: Action, frame: &ResolveFrame) -> Evaluation {
        match expected {
            Action::Add => self.resolve_add(frame).into(),
            Action::Heat => self.resolve_heat(frame),
            Action::Mix | Action::Tilt => {
                if self.locked(frame.now_ms) {
                    return Resolution::Pending.into();
                }
                let sample = self.sampler.sample(frame.accel);
                if expected == Action::Mix {
                    self.resolve_mix(frame.now_ms, sample.delta).into()
                } else {
                    self.resolve_tilt(frame.now_ms, sample.reading.x).into()
                }
            }
        }
    }

    fn locked(&self, now_ms: u32) -> bool {
        self.last_action_ms
            .is_some_and(|t| now_ms.wrapping_sub(t) < ACTION_LOCK_MS)
    }

    fn stamp_action(&mut self, now_ms: u32) {
        self.last_action_ms = Some(now_ms);
    }

    fn resolve_add(&mut self, frame: &ResolveFrame) -> Resolution {
        if frame.button_fell {
            self.stamp_action(frame.now_ms);
            return Resolution::Confirmed(Action::Add);
        }

        if !frame.difficulty.punishes_shake()
            || frame.now_ms.wrapping_sub(frame.step_start_ms) < ADD_SHAKE_GRACE_MS
        {
            return Resolution::Pending;
        }

        match self.sampler.sample(frame.accel).delta {
            Some(delta) if delta > SHAKE_THRESHOLD => {
                debug!("ADD: shake delta {delta:.2} rejected");
                self.stamp_action(frame.now_ms);
                Resolution::WrongMove(WrongMoveKind::Shake)
            }
            _ => Resolution::Pending,
        }
    }

    fn resolve_mix(&mut self, now_ms: u32, delta: Option<f32>) -> Resolution {
        let Some(delta) = delta.filter(|d| *d > SHAKE_THRESHOLD) else {
            return Resolution::Pending;
        };

        let in_window = self
            .last_spike_ms
            .is_some_and(|t| now_ms.wrapping_sub(t) < MIX_SPIKE_WINDOW_MS);
        self.spike_count = if in_window {
            self.spike_count.saturating_add(1)
        } else {
            1
        };
        self.last_spike_ms = Some(now_ms);
        debug!("MIX: spike {delta:.2} (count {})", self.spike_count);

        let cooled = self
            .last_shake_ms
            .is_none_or(|t| now_ms.wrapping_sub(t) > COOLDOWN_MS);
        if self.spike_count >= 2 && cooled {
            self.spike_count = 0;
            self.last_shake_ms = Some(now_ms);
            self.stamp_action(now_ms);
            self.tilt_hold_since = None;
            return Resolution::Confirmed(Action::Mix);
        }

        Resolution::Pending
    }

    fn resolve_tilt(&mut self, now_ms: u32, x: f32) -> Resolution {
        if x.abs() <= TILT_THRESHOLD {
            self.tilt_hold_since = None;
            return Resolution::Pending;
        }

        let Some(since) = self.tilt_hold_since else {
            self.tilt_hold_since = Some(now_ms);
            return Resolution::Pending;
        };

        let held = now_ms.wrapping_sub(since) > TILT_HOLD_MS;
        let cooled = self
            .last_tilt_ms
            .is_none_or(|t| now_ms.wrapping_sub(t) > COOLDOWN_MS);
        if held && cooled {
            self.last_tilt_ms = Some(now_ms);
            self.stamp_action(now_ms);
            self.tilt_hold_since = None;
            return Resolution::Confirmed(Action::Tilt);
        }

        Resolution::Pending
    }

    fn resolve_heat(&mut self, frame: &ResolveFrame) -> Evaluation {
        let Some(challenge) = self.heat.as_mut() else {
            warn!("HEAT step without an active challenge");
            return Resolution::Pending.into();
        };

        let tick = challenge.update(frame.now_ms, frame.encoder_position);
        let resolution = if tick.hold == HoldPhase::Cleared {
            self.stamp_action(frame.now_ms);
            Resolution::Confirmed(Action::Heat)
        } else if frame.now_ms.wrapping_sub(frame.step_start_ms) > HEAT_TIMEOUT_MS {
            Resolution::TimedOut(TimeoutKind::Heat)
        } else {
            Resolution::Pending
        };

        Evaluation {
            resolution,
            heat: Some(tick),
        }
    }
}
