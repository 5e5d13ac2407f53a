//! Whole-session tests: menu → PLAYING → GAME_OVER / GAME_WIN → menu.

use cookgame::app::commands::GameCommand;
use cookgame::app::events::GameEvent;
use cookgame::fsm::StateId;
use cookgame::game::{Action, Difficulty, GameOverReason, HeatLevel};

use super::mock_hw::{Rig, SHAKE, TILTED};

/// Shake then settle: two spikes inside the MIX window.
fn do_mix(rig: &mut Rig) {
    rig.advance(450);
    rig.accel(SHAKE);
    rig.tick();
    rig.rest();
    rig.tick();
}

/// Hold a tilt past the hold time, then level out again.
fn do_tilt(rig: &mut Rig) {
    rig.advance(450);
    rig.accel(TILTED);
    rig.advance(500);
    rig.rest();
}

/// Turn one detent toward LOW and hold until "HEAT OK!" has been shown.
fn do_heat_low(rig: &mut Rig) {
    rig.advance(300);
    rig.turn(true);
    rig.advance(1200);
    rig.advance(2500);
}

fn game_over_reason(rig: &Rig) -> Option<Option<GameOverReason>> {
    rig.events().iter().find_map(|e| match e {
        GameEvent::GameOver(summary) => Some(summary.reason),
        _ => None,
    })
}

// ── Menu ──────────────────────────────────────────────────────

#[test]
fn menu_click_starts_highlighted_difficulty() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.turn(false);
    rig.turn(false);
    assert_eq!(rig.outputs.last_line(2), Some("> NORMAL"));

    rig.start_game();
    let session = rig.app.session().unwrap();
    assert_eq!(session.difficulty(), Difficulty::Normal);
    assert_eq!(rig.outputs.last_line(0), Some("NORMAL MODE"));
    assert_eq!(rig.outputs.last_line(1), Some("STEP 1/12"));
    assert_eq!(rig.outputs.last_line(2), Some("DO: ADD"));
}

#[test]
fn press_alone_does_not_start() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.press();
    rig.advance(500);
    assert_eq!(rig.state(), StateId::Menu);
    rig.release();
    assert_eq!(rig.state(), StateId::Playing);
}

// ── Steps ─────────────────────────────────────────────────────

#[test]
fn add_steps_award_points() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.start_game();

    rig.do_add();
    assert_eq!(rig.score(), 10);
    assert_eq!(rig.step_number(), Some(2));
    rig.do_add();
    rig.do_add();
    assert_eq!(rig.score(), 30);

    assert_eq!(rig.outputs.last_line(1), Some("STEP 4/10"));
    assert_eq!(rig.outputs.last_line(2), Some("DO: HEAT"));
    assert_eq!(rig.outputs.last_line(3), Some("SET HEAT: LOW"));
    assert!(rig.events().contains(&GameEvent::StepConfirmed {
        action: Action::Add,
        score: 30,
    }));
}

#[test]
fn press_during_settle_window_is_ignored() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.start_game();
    rig.advance(100);
    rig.click();
    assert_eq!(rig.score(), 0);
    assert_eq!(rig.step_number(), Some(1));
}

#[test]
fn easy_game_plays_to_win() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.start_game();

    rig.do_add();
    rig.do_add();
    rig.do_add();
    do_heat_low(&mut rig);
    assert_eq!(rig.score(), 40);
    assert_eq!(rig.outputs.last_line(2), Some("DO: MIX"));

    do_mix(&mut rig);
    assert_eq!(rig.score(), 50);
    do_tilt(&mut rig);
    assert_eq!(rig.score(), 60);
    rig.do_add();
    do_mix(&mut rig);
    do_tilt(&mut rig);
    assert_eq!(rig.score(), 90);
    assert_eq!(rig.step_number(), Some(10));

    rig.do_add();
    assert_eq!(rig.state(), StateId::GameWin);
    assert_eq!(rig.score(), 100);
    assert_eq!(rig.outputs.last_line(0), Some("YOU WIN!"));
    assert_eq!(rig.outputs.last_line(2), Some("SCORE: 100"));

    let won = rig.events().iter().find_map(|e| match e {
        GameEvent::GameWon(summary) => Some(summary.clone()),
        _ => None,
    });
    let won = won.expect("GameWon event");
    assert_eq!(won.steps_completed, 10);
    assert_eq!(won.reason, None);

    rig.advance(100);
    rig.click();
    assert_eq!(rig.state(), StateId::Menu);
}

// ── Losing ────────────────────────────────────────────────────

#[test]
fn idle_step_times_out() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.start_game(); // step starts at t=20

    rig.advance(5000);
    assert_eq!(rig.state(), StateId::Playing);
    rig.tick();
    assert_eq!(rig.state(), StateId::GameOver);
    assert_eq!(rig.score(), 0);
    assert_eq!(rig.outputs.last_line(1), Some("TIME OUT"));
    assert_eq!(game_over_reason(&rig), Some(Some(GameOverReason::TimeOut)));

    rig.click();
    assert_eq!(rig.state(), StateId::Menu);
    assert!(rig.app.session().is_none());
}

#[test]
fn shake_during_add_loses_on_normal_after_grace() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.app.handle_command(
        GameCommand::StartGame(Difficulty::Normal),
        rig.now,
        &mut rig.outputs,
        &mut rig.sink,
    );
    assert_eq!(rig.state(), StateId::Playing);

    // Inside the grace period nothing is sampled.
    rig.advance(300);
    rig.accel(SHAKE);
    rig.advance(200);
    rig.rest();
    rig.advance(200);
    assert_eq!(rig.state(), StateId::Playing);

    rig.accel(SHAKE);
    rig.tick();
    assert_eq!(rig.state(), StateId::GameOver);
    assert_eq!(rig.outputs.last_line(1), Some("WRONG MOVE"));
    assert_eq!(game_over_reason(&rig), Some(Some(GameOverReason::WrongMove)));
}

#[test]
fn shake_during_add_is_harmless_on_easy() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.start_game();
    rig.advance(700);
    rig.accel(SHAKE);
    rig.tick();
    rig.rest();
    rig.tick();
    assert_eq!(rig.state(), StateId::Playing);

    rig.click();
    assert_eq!(rig.score(), 10);
}

#[test]
fn lose_flash_lights_red() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.start_game();
    rig.advance(5010);
    assert_eq!(rig.state(), StateId::GameOver);
    assert_eq!(rig.outputs.colours.last(), Some(&(77, 0, 0)));

    rig.advance(1000);
    assert_eq!(rig.outputs.colours.last(), Some(&(0, 0, 0)));
}

// ── Commands and clock ────────────────────────────────────────

#[test]
fn return_to_menu_abandons_session() {
    let mut rig = Rig::new(HeatLevel::Low);
    rig.start_game();
    rig.do_add();
    rig.app
        .handle_command(GameCommand::ReturnToMenu, rig.now, &mut rig.outputs, &mut rig.sink);
    assert_eq!(rig.state(), StateId::Menu);
    assert_eq!(rig.outputs.last_line(0), Some("COOKING GAME"));
    assert!(rig.events().contains(&GameEvent::StateChanged {
        from: StateId::Playing,
        to: StateId::Menu,
    }));
}

#[test]
fn step_timing_survives_clock_wrap() {
    let mut rig = Rig::starting_at(HeatLevel::Low, u32::MAX - 100);
    rig.start_game();
    rig.do_add();
    assert_eq!(rig.score(), 10);

    rig.advance(4900);
    assert_eq!(rig.state(), StateId::Playing);
    rig.advance(200);
    assert_eq!(rig.state(), StateId::GameOver);
}
