//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to. It contains the tick's inputs, the encoder and button
//! trackers, the game session, output commands, timing, and configuration.
//! Think of it as the "blackboard" in a blackboard architecture.

use heapless::Vec;
use log::warn;

use crate::app::events::GameEvent;
use crate::app::ports::{InputFrame, TargetSource};
use crate::app::screen::Screen;
use crate::config::GameConfig;
use crate::drivers::indicator::IndicatorMode;
use crate::game::heat::ClockTargetSource;
use crate::game::{ActionResolver, Difficulty, GameOverReason, GameSession};
use crate::sensors::encoder::EncoderTracker;

/// Upper bound on events raised in one tick.
pub const MAX_EVENTS_PER_TICK: usize = 8;

// ---------------------------------------------------------------------------
// Button edge tracking
// ---------------------------------------------------------------------------

/// Edge detector plus the "press seen in this state" gate.
///
/// A click is a press followed by a release. The gate is disarmed on every
/// state entry, so a press that began in an earlier state (or during a
/// blocking screen) cannot act once it is released.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonGate {
    pressed: bool,
    fell: bool,
    released: bool,
    armed: bool,
}

impl ButtonGate {
    pub fn update(&mut self, pressed: bool) {
        self.fell = pressed && !self.pressed;
        self.released = !pressed && self.pressed;
        if self.fell {
            self.armed = true;
        }
        self.pressed = pressed;
    }

    /// Released → pressed on this tick.
    pub fn fell(&self) -> bool {
        self.fell
    }

    /// Forget any press in progress.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// `true` once per click whose press was seen since the last disarm.
    pub fn take_click(&mut self) -> bool {
        if self.released && self.armed {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Menu cursor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct MenuCursor {
    /// Highlighted difficulty.
    pub selected: Difficulty,
    /// Encoder position divided by ticks-per-step at the last move.
    last_step: i32,
}

impl MenuCursor {
    pub fn new(selected: Difficulty) -> Self {
        Self {
            selected,
            last_step: 0,
        }
    }

    /// Re-anchor to the current encoder position without moving.
    pub fn sync(&mut self, encoder_position: i32, ticks_per_step: i32) {
        self.last_step = encoder_position.div_euclid(ticks_per_step.max(1));
    }

    /// Move one entry per change of step. Returns `true` if the selection moved.
    pub fn update(&mut self, encoder_position: i32, ticks_per_step: i32) -> bool {
        let step = encoder_position.div_euclid(ticks_per_step.max(1));
        if step == self.last_step {
            return false;
        }

        let idx = self.selected.index();
        let next = if step > self.last_step {
            idx + 1
        } else {
            idx + Difficulty::COUNT - 1
        };
        self.selected = Difficulty::from_index(next);
        self.last_step = step;
        true
    }
}

// ---------------------------------------------------------------------------
// Output commands (written by state handlers; flushed by the service)
// ---------------------------------------------------------------------------

/// Outputs requested during one tick. `None` means "leave as is".
#[derive(Debug, Clone, Default)]
pub struct OutputCommands {
    pub screen: Option<Screen>,
    pub indicator: Option<IndicatorMode>,
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Timing --
    /// Milliseconds timestamp of the current tick.
    pub now_ms: u32,

    // -- Inputs --
    /// Raw inputs of the current tick.
    pub inputs: InputFrame,
    pub encoder: EncoderTracker,
    pub button: ButtonGate,

    // -- Game --
    pub menu: MenuCursor,
    /// Live session; `None` in the menu.
    pub session: Option<GameSession>,
    pub resolver: ActionResolver,
    pub targets: Box<dyn TargetSource>,
    /// Why the last session ended, if it was lost.
    pub outcome: Option<GameOverReason>,

    // -- Outputs --
    pub commands: OutputCommands,
    pub events: Vec<GameEvent, MAX_EVENTS_PER_TICK>,

    // -- Configuration --
    pub config: GameConfig,
}

impl FsmContext {
    /// Create a new context using the uptime-based HEAT target rotation.
    pub fn new(config: GameConfig) -> Self {
        Self::with_targets(config, Box::new(ClockTargetSource))
    }

    pub fn with_targets(config: GameConfig, targets: Box<dyn TargetSource>) -> Self {
        Self {
            now_ms: 0,
            inputs: InputFrame::default(),
            encoder: EncoderTracker::new(),
            button: ButtonGate::default(),
            menu: MenuCursor::new(config.default_difficulty),
            session: None,
            resolver: ActionResolver::new(),
            targets,
            outcome: None,
            commands: OutputCommands::default(),
            events: Vec::new(),
            config,
        }
    }

    /// Latch one tick of raw inputs and update the edge trackers.
    pub fn ingest(&mut self, now_ms: u32, inputs: InputFrame) {
        self.now_ms = now_ms;
        self.inputs = inputs;
        self.encoder.update(inputs.encoder_a, inputs.encoder_b);
        self.button.update(inputs.button_pressed);
    }

    /// Queue an outbound event for this tick.
    pub fn emit(&mut self, event: GameEvent) {
        if let Err(dropped) = self.events.push(event) {
            warn!("Event queue full, dropping {:?}", dropped);
        }
    }

    pub fn show(&mut self, screen: Screen) {
        self.commands.screen = Some(screen);
    }

    pub fn set_indicator(&mut self, mode: IndicatorMode) {
        self.commands.indicator = Some(mode);
    }
}
