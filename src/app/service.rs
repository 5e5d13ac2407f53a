//! Application service: the hexagonal core.
//!
//! [`GameService`] owns the FSM, its shared context and the indicator
//! effect engine. All I/O flows through port traits injected at call
//! sites, so the whole game runs against mock adapters on the host.
//!
//! ```text
//!  InputPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                │      GameService        │
//! DisplayPort ◀──│  FSM · Resolver · LED   │──▶ IndicatorPort
//!                └────────────────────────┘
//! ```

use log::{debug, info};

use crate::config::GameConfig;
use crate::drivers::indicator::{IndicatorEngine, Rgb};
use crate::fsm::context::FsmContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::game::GameSession;
use crate::game::heat::ClockTargetSource;

use super::commands::GameCommand;
use super::events::GameEvent;
use super::ports::{DisplayPort, EventSink, IndicatorPort, InputPort, TargetSource};

// ───────────────────────────────────────────────────────────────
// GameService
// ───────────────────────────────────────────────────────────────

/// Orchestrates one tick of the game: inputs in, FSM, outputs out.
pub struct GameService {
    fsm: Fsm,
    ctx: FsmContext,
    indicator: IndicatorEngine,
    /// Last colour pushed to the indicator port.
    last_colour: Option<Rgb>,
    tick_count: u64,
}

impl GameService {
    /// Construct the service with the uptime-based HEAT target rotation.
    ///
    /// Does **not** start the FSM. Call [`start`](Self::start) next.
    pub fn new(config: GameConfig) -> Self {
        Self::with_target_source(config, Box::new(ClockTargetSource))
    }

    /// Construct the service with an injected HEAT target source.
    pub fn with_target_source(config: GameConfig, targets: Box<dyn TargetSource>) -> Self {
        let config = config.or_default();
        let indicator = IndicatorEngine::new(&config);
        let ctx = FsmContext::with_targets(config, targets);
        let fsm = Fsm::new(build_state_table(), StateId::Menu);

        Self {
            fsm,
            ctx,
            indicator,
            last_colour: None,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Enter the menu and draw it.
    pub fn start(
        &mut self,
        now_ms: u32,
        outputs: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        self.ctx.now_ms = now_ms;
        self.fsm.start(&mut self.ctx);
        self.flush(now_ms, outputs, sink);
        sink.emit(&GameEvent::Started(self.fsm.current_state()));
        info!("GameService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one cycle: read inputs → FSM → display, indicator, events.
    ///
    /// `outputs` satisfies **both** [`DisplayPort`] and [`IndicatorPort`],
    /// which avoids a double mutable borrow while keeping the port
    /// boundary explicit.
    pub fn tick(
        &mut self,
        now_ms: u32,
        inputs: &mut impl InputPort,
        outputs: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        let prev_state = self.fsm.current_state();

        // 1. Latch inputs and update edge trackers
        let frame = inputs.read_inputs(now_ms);
        self.ctx.ingest(now_ms, frame);

        // 2. FSM tick (pure game logic)
        self.fsm.tick(&mut self.ctx);

        // 3. Screen, indicator and queued events
        self.flush(now_ms, outputs, sink);

        // 4. Emit state change if the FSM moved
        let new_state = self.fsm.current_state();
        if new_state != prev_state {
            sink.emit(&GameEvent::StateChanged {
                from: prev_state,
                to: new_state,
            });
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command (console, tests).
    pub fn handle_command(
        &mut self,
        cmd: GameCommand,
        now_ms: u32,
        outputs: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        let prev = self.fsm.current_state();
        self.ctx.now_ms = now_ms;

        match cmd {
            GameCommand::StartGame(difficulty) => {
                if prev != StateId::Menu {
                    debug!("StartGame ignored in {:?}", prev);
                    return;
                }
                self.ctx.menu.selected = difficulty;
                self.fsm.force_transition(StateId::Playing, &mut self.ctx);
            }
            GameCommand::ReturnToMenu => {
                self.fsm.force_transition(StateId::Menu, &mut self.ctx);
            }
        }

        self.flush(now_ms, outputs, sink);
        let next = self.fsm.current_state();
        if next != prev {
            sink.emit(&GameEvent::StateChanged {
                from: prev,
                to: next,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Live session, or the one that just ended on GAME_OVER / GAME_WIN.
    pub fn session(&self) -> Option<&GameSession> {
        self.ctx.session.as_ref()
    }

    /// Score of the current (or last) session; 0 in the menu.
    pub fn score(&self) -> u32 {
        self.session().map_or(0, GameSession::score)
    }

    /// Total ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &GameConfig {
        &self.ctx.config
    }

    // ── Internal ──────────────────────────────────────────────

    /// Translate the handlers' output commands into port calls.
    fn flush(
        &mut self,
        now_ms: u32,
        outputs: &mut (impl DisplayPort + IndicatorPort),
        sink: &mut impl EventSink,
    ) {
        if let Some(screen) = self.ctx.commands.screen.take() {
            outputs.render(&screen);
        }

        if let Some(mode) = self.ctx.commands.indicator.take() {
            self.indicator.set_mode(mode, now_ms);
        }
        let colour = self.indicator.tick(now_ms);
        if self.last_colour != Some(colour) {
            outputs.set_colour(colour);
            self.last_colour = Some(colour);
        }

        for event in &self.ctx.events {
            sink.emit(event);
        }
        self.ctx.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::InputFrame;
    use crate::app::screen::Screen;
    use crate::game::Difficulty;
    use crate::game::heat::FixedTarget;
    use crate::game::HeatLevel;

    #[derive(Default)]
    struct Outputs {
        screens: Vec<Screen>,
        colours: Vec<Rgb>,
    }

    impl DisplayPort for Outputs {
        fn render(&mut self, screen: &Screen) {
            self.screens.push(screen.clone());
        }
    }

    impl IndicatorPort for Outputs {
        fn set_colour(&mut self, colour: Rgb) {
            self.colours.push(colour);
        }
    }

    #[derive(Default)]
    struct Sink(Vec<GameEvent>);

    impl EventSink for Sink {
        fn emit(&mut self, event: &GameEvent) {
            self.0.push(event.clone());
        }
    }

    struct Idle;

    impl InputPort for Idle {
        fn read_inputs(&mut self, _now_ms: u32) -> InputFrame {
            InputFrame::default()
        }
    }

    fn service() -> GameService {
        GameService::with_target_source(
            GameConfig::default(),
            Box::new(FixedTarget(HeatLevel::Mid)),
        )
    }

    #[test]
    fn start_draws_menu_and_turns_indicator_off() {
        let mut app = service();
        let (mut out, mut sink) = (Outputs::default(), Sink::default());
        app.start(0, &mut out, &mut sink);

        assert_eq!(app.state(), StateId::Menu);
        assert_eq!(out.screens.len(), 1);
        assert_eq!(out.screens[0].line(0), Some("COOKING GAME"));
        assert_eq!(out.colours, [(0, 0, 0)]);
        assert_eq!(sink.0, [GameEvent::Started(StateId::Menu)]);
    }

    #[test]
    fn start_game_command_only_from_menu() {
        let mut app = service();
        let (mut out, mut sink) = (Outputs::default(), Sink::default());
        app.start(0, &mut out, &mut sink);

        app.handle_command(GameCommand::StartGame(Difficulty::Hard), 10, &mut out, &mut sink);
        assert_eq!(app.state(), StateId::Playing);
        assert_eq!(app.session().map(GameSession::difficulty), Some(Difficulty::Hard));
        assert!(sink.0.contains(&GameEvent::StateChanged {
            from: StateId::Menu,
            to: StateId::Playing,
        }));

        app.handle_command(GameCommand::StartGame(Difficulty::Easy), 20, &mut out, &mut sink);
        assert_eq!(app.session().map(GameSession::difficulty), Some(Difficulty::Hard));
    }

    #[test]
    fn return_to_menu_clears_session() {
        let mut app = service();
        let (mut out, mut sink) = (Outputs::default(), Sink::default());
        app.start(0, &mut out, &mut sink);
        app.handle_command(GameCommand::StartGame(Difficulty::Easy), 0, &mut out, &mut sink);
        app.handle_command(GameCommand::ReturnToMenu, 50, &mut out, &mut sink);

        assert_eq!(app.state(), StateId::Menu);
        assert!(app.session().is_none());
        assert_eq!(app.score(), 0);
    }

    #[test]
    fn colour_is_pushed_only_on_change() {
        let mut app = service();
        let (mut out, mut sink) = (Outputs::default(), Sink::default());
        app.start(0, &mut out, &mut sink);
        for t in 1..20 {
            app.tick(t * 10, &mut Idle, &mut out, &mut sink);
        }
        assert_eq!(out.colours.len(), 1);
        assert_eq!(app.tick_count(), 19);
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        let app = GameService::new(config);
        assert_eq!(app.config(), &GameConfig::default());
    }
}
