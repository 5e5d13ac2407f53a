//! Mock hardware for integration tests.
//!
//! [`MockInputs`] plays back whatever the test sets on it, [`MockOutputs`]
//! records every screen and colour, and [`Rig`] drives a whole
//! [`GameService`] on a 10 ms tick grid.

use cookgame::app::events::GameEvent;
use cookgame::app::ports::{DisplayPort, EventSink, IndicatorPort, InputFrame, InputPort};
use cookgame::app::screen::Screen;
use cookgame::app::service::GameService;
use cookgame::config::GameConfig;
use cookgame::drivers::indicator::Rgb;
use cookgame::fsm::StateId;
use cookgame::game::HeatLevel;
use cookgame::game::heat::FixedTarget;
use cookgame::sensors::gesture::AccelReading;

pub const TICK_MS: u32 = 10;

/// Far enough from 1 g to count as a shake spike.
pub const SHAKE: AccelReading = AccelReading::new(25.0, 0.0, 0.0);
/// Tipped well past the tilt threshold on X.
pub const TILTED: AccelReading = AccelReading::new(8.0, 0.0, 5.0);

// ── Inputs ────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockInputs {
    pub frame: InputFrame,
}

impl InputPort for MockInputs {
    fn read_inputs(&mut self, _now_ms: u32) -> InputFrame {
        self.frame
    }
}

// ── Outputs ───────────────────────────────────────────────────

#[derive(Default)]
pub struct MockOutputs {
    pub screens: Vec<Screen>,
    pub colours: Vec<Rgb>,
}

#[allow(dead_code)]
impl MockOutputs {
    pub fn last_screen(&self) -> Option<&Screen> {
        self.screens.last()
    }

    pub fn last_line(&self, index: usize) -> Option<&str> {
        self.last_screen().and_then(|s| s.line(index))
    }

    pub fn showed(&self, text: &str) -> bool {
        self.screens.iter().any(|s| s.lines().any(|l| l == text))
    }
}

impl DisplayPort for MockOutputs {
    fn render(&mut self, screen: &Screen) {
        self.screens.push(screen.clone());
    }
}

impl IndicatorPort for MockOutputs {
    fn set_colour(&mut self, colour: Rgb) {
        self.colours.push(colour);
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig ───────────────────────────────────────────────────────

pub struct Rig {
    pub app: GameService,
    pub inputs: MockInputs,
    pub outputs: MockOutputs,
    pub sink: RecordingSink,
    pub now: u32,
}

#[allow(dead_code)]
impl Rig {
    /// Started service whose HEAT steps always ask for `target`.
    pub fn new(target: HeatLevel) -> Self {
        Self::starting_at(target, 0)
    }

    pub fn starting_at(target: HeatLevel, now: u32) -> Self {
        let app =
            GameService::with_target_source(GameConfig::default(), Box::new(FixedTarget(target)));
        let mut rig = Self {
            app,
            inputs: MockInputs::default(),
            outputs: MockOutputs::default(),
            sink: RecordingSink::default(),
            now,
        };
        rig.app.start(now, &mut rig.outputs, &mut rig.sink);
        rig
    }

    pub fn state(&self) -> StateId {
        self.app.state()
    }

    /// One tick, `TICK_MS` after the previous one.
    pub fn tick(&mut self) {
        self.now = self.now.wrapping_add(TICK_MS);
        self.app
            .tick(self.now, &mut self.inputs, &mut self.outputs, &mut self.sink);
    }

    /// Keep ticking until `ms` have passed.
    pub fn advance(&mut self, ms: u32) {
        for _ in 0..ms / TICK_MS {
            self.tick();
        }
    }

    pub fn press(&mut self) {
        self.inputs.frame.button_pressed = true;
        self.tick();
    }

    pub fn release(&mut self) {
        self.inputs.frame.button_pressed = false;
        self.tick();
    }

    pub fn click(&mut self) {
        self.press();
        self.release();
    }

    /// One encoder detent; counter-clockwise when `ccw`.
    pub fn turn(&mut self, ccw: bool) {
        self.inputs.frame.encoder_b = !ccw;
        self.inputs.frame.encoder_a = false;
        self.tick();
        self.inputs.frame.encoder_a = true;
        self.inputs.frame.encoder_b = true;
        self.tick();
    }

    pub fn accel(&mut self, reading: AccelReading) {
        self.inputs.frame.accel = Ok(reading);
    }

    pub fn rest(&mut self) {
        self.accel(AccelReading::REST);
    }

    /// Click through the menu into a session at the highlighted level.
    pub fn start_game(&mut self) {
        self.click();
        assert_eq!(self.state(), StateId::Playing);
    }

    /// Wait out the settle window, then press the button.
    pub fn do_add(&mut self) {
        self.advance(250);
        self.click();
    }

    pub fn score(&self) -> u32 {
        self.app.score()
    }

    pub fn step_number(&self) -> Option<usize> {
        self.app.session().map(|s| s.step_number())
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.sink.events
    }
}
