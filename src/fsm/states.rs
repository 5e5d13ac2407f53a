//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers. No closures, no dynamic
//! dispatch.
//!
//! ```text
//!  MENU ──[click]──▶ PLAYING ──[last step confirmed]──▶ GAME_WIN
//!    ▲                  │                                   │
//!    │       [TIME OUT / HEAT TIMEOUT / WRONG MOVE]         │
//!    │                  ▼                                   │
//!    └─────[click]── GAME_OVER              MENU ◀─[click]──┘
//! ```
//!
//! PLAYING, once per tick:
//!
//! 1. While the "HEAT OK!" screen is held (2500 ms): frozen. On expiry the
//!    next step is entered and its timers start.
//! 2. Non-HEAT steps: past the difficulty limit → GAME_OVER("TIME OUT").
//! 3. Within 200 ms of a step change: no gesture evaluation.
//! 4. Resolve the expected action and react.

use log::{debug, info, warn};

use super::context::FsmContext;
use super::screens;
use super::{StateDescriptor, StateId};
use crate::app::events::{GameEvent, GameSummary};
use crate::drivers::indicator::IndicatorMode;
use crate::game::heat::{HeatTick, HoldPhase};
use crate::game::resolver::{ResolveFrame, TimeoutKind, WrongMoveKind};
use crate::game::session::ConfirmationHold;
use crate::game::{Action, ActionResolver, GameOverReason, GameSession, HeatLevel, Resolution};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table. Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Menu
        StateDescriptor {
            id: StateId::Menu,
            name: "Menu",
            on_enter: Some(menu_enter),
            on_exit: None,
            on_update: menu_update,
        },
        // Index 1: Playing
        StateDescriptor {
            id: StateId::Playing,
            name: "Playing",
            on_enter: Some(playing_enter),
            on_exit: Some(playing_exit),
            on_update: playing_update,
        },
        // Index 2: GameOver
        StateDescriptor {
            id: StateId::GameOver,
            name: "GameOver",
            on_enter: Some(game_over_enter),
            on_exit: None,
            on_update: end_screen_update,
        },
        // Index 3: GameWin
        StateDescriptor {
            id: StateId::GameWin,
            name: "GameWin",
            on_enter: Some(game_win_enter),
            on_exit: None,
            on_update: end_screen_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  MENU: difficulty selection
// ═══════════════════════════════════════════════════════════════════════════

fn menu_enter(ctx: &mut FsmContext) {
    ctx.session = None;
    ctx.button.disarm();
    ctx.menu
        .sync(ctx.encoder.position(), ctx.config.menu_ticks_per_step);
    ctx.set_indicator(IndicatorMode::Off);
    ctx.show(screens::menu(ctx.menu.selected));
    info!("MENU: {} highlighted", ctx.menu.selected.name());
}

fn menu_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx
        .menu
        .update(ctx.encoder.position(), ctx.config.menu_ticks_per_step)
    {
        debug!("MENU: {} highlighted", ctx.menu.selected.name());
        ctx.show(screens::menu(ctx.menu.selected));
    }

    if ctx.button.take_click() {
        return Some(StateId::Playing);
    }

    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  PLAYING: one session
// ═══════════════════════════════════════════════════════════════════════════

fn playing_enter(ctx: &mut FsmContext) {
    let difficulty = ctx.menu.selected;
    ctx.session = Some(GameSession::new(difficulty, ctx.now_ms));
    ctx.resolver = ActionResolver::new();
    ctx.outcome = None;
    info!("=== START {} ===", difficulty.name());
    enter_step(ctx);
}

fn playing_exit(ctx: &mut FsmContext) {
    ctx.button.disarm();
}

/// Show the current step and capture its baselines.
fn enter_step(ctx: &mut FsmContext) {
    let now = ctx.now_ms;
    let position = ctx.encoder.position();
    let accel = ctx.inputs.accel;

    let Some(session) = ctx.session.as_mut() else {
        return;
    };
    let Some(action) = session.current_action() else {
        return;
    };

    session.stamp_step(now);
    ctx.resolver
        .begin_step(action, now, position, accel, &mut *ctx.targets);

    let (number, total) = (session.step_number(), session.total_steps());
    info!("[STEP {}/{}] DO: {}", number, total, action.name());

    let screen = match ctx.resolver.heat() {
        Some(heat) => screens::heat_prompt(session, heat.target()),
        None => screens::step_prompt(session, action),
    };

    ctx.show(screen);
    ctx.set_indicator(IndicatorMode::Level(HeatLevel::Off));
    ctx.emit(GameEvent::StepStarted {
        number,
        total,
        action,
    });
}

fn playing_update(ctx: &mut FsmContext) -> Option<StateId> {
    let now = ctx.now_ms;

    let Some(session) = ctx.session.as_mut() else {
        warn!("PLAYING without a session");
        return Some(StateId::Menu);
    };

    match session.poll_confirmation(now) {
        ConfirmationHold::Showing => return None,
        ConfirmationHold::Expired => {
            enter_step(ctx);
            return None;
        }
        ConfirmationHold::Inactive => {}
    }

    let Some(expected) = session.current_action() else {
        return Some(StateId::GameWin);
    };

    if expected != Action::Heat && session.step_timed_out(now) {
        return Some(lose(ctx, GameOverReason::TimeOut));
    }

    if session.settling(now) {
        return None;
    }

    let frame = ResolveFrame {
        now_ms: now,
        step_start_ms: session.step_start_ms(),
        difficulty: session.difficulty(),
        encoder_position: ctx.encoder.position(),
        button_fell: ctx.button.fell(),
        accel: ctx.inputs.accel,
    };
    let evaluation = ctx.resolver.resolve(expected, &frame);

    if let Some(tick) = evaluation.heat {
        heat_feedback(ctx, tick);
    }

    match evaluation.resolution {
        Resolution::Pending => None,
        Resolution::TimedOut(TimeoutKind::Heat) => Some(lose(ctx, GameOverReason::HeatTimeout)),
        Resolution::WrongMove(WrongMoveKind::Shake) => Some(lose(ctx, GameOverReason::WrongMove)),
        Resolution::Confirmed(action) => confirm(ctx, action),
    }
}

/// Award the step and either finish, freeze behind "HEAT OK!", or move on.
fn confirm(ctx: &mut FsmContext, action: Action) -> Option<StateId> {
    let now = ctx.now_ms;
    let session = ctx.session.as_mut()?;

    let score = session.award_step();
    debug!("OK {} -> score {}", action.name(), score);
    let complete = session.is_complete();
    if action == Action::Heat && !complete {
        session.hold_confirmation(now);
    }
    ctx.emit(GameEvent::StepConfirmed { action, score });

    if complete {
        return Some(StateId::GameWin);
    }
    if action != Action::Heat {
        enter_step(ctx);
    }
    None
}

/// Live HEAT display and indicator updates.
fn heat_feedback(ctx: &mut FsmContext, tick: HeatTick) {
    let Some(target) = ctx.resolver.heat().map(|h| h.target()) else {
        return;
    };

    if tick.changed {
        debug!("HEAT: {} (target {})", tick.level.name(), target.name());
        ctx.set_indicator(IndicatorMode::Level(tick.level));
        ctx.emit(GameEvent::HeatLevelChanged {
            level: tick.level,
            target,
        });
    }

    let Some(session) = ctx.session.as_ref() else {
        return;
    };
    let screen = match tick.hold {
        HoldPhase::Cleared => Some(screens::heat_ok(session, tick.level)),
        HoldPhase::Started => Some(screens::heat_hold(session, tick.level)),
        HoldPhase::Holding | HoldPhase::Idle if tick.redraw => {
            Some(screens::heat_live(session, target, tick.level))
        }
        HoldPhase::Holding | HoldPhase::Idle => None,
    };
    if let Some(screen) = screen {
        ctx.show(screen);
    }
}

fn lose(ctx: &mut FsmContext, reason: GameOverReason) -> StateId {
    ctx.outcome = Some(reason);
    StateId::GameOver
}

// ═══════════════════════════════════════════════════════════════════════════
//  GAME_OVER / GAME_WIN: summary until the button is clicked
// ═══════════════════════════════════════════════════════════════════════════

fn game_over_enter(ctx: &mut FsmContext) {
    let reason = ctx.outcome;
    let score = ctx.session.as_ref().map_or(0, GameSession::score);
    match reason {
        Some(r) => info!("GAME OVER: {} (score {})", r, score),
        None => info!("GAME OVER (score {})", score),
    }

    ctx.button.disarm();
    ctx.show(screens::game_over(reason, score));
    ctx.set_indicator(IndicatorMode::LoseFlash);
    if let Some(session) = ctx.session.as_ref() {
        let summary = GameSummary::from_session(session, reason);
        ctx.emit(GameEvent::GameOver(summary));
    }
}

fn game_win_enter(ctx: &mut FsmContext) {
    let score = ctx.session.as_ref().map_or(0, GameSession::score);
    info!("YOU WIN! (score {})", score);

    ctx.button.disarm();
    ctx.show(screens::win(score));
    ctx.set_indicator(IndicatorMode::WinRainbow);
    if let Some(session) = ctx.session.as_ref() {
        let summary = GameSummary::from_session(session, None);
        ctx.emit(GameEvent::GameWon(summary));
    }
}

fn end_screen_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.button.take_click() {
        return Some(StateId::Menu);
    }
    None
}
