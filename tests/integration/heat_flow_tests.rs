//! HEAT step: live level, hold-to-confirm, freeze and timeout.

use cookgame::app::events::GameEvent;
use cookgame::fsm::StateId;
use cookgame::game::HeatLevel;

use super::mock_hw::Rig;

/// Easy session sitting on step 4 (HEAT), entered at t=820, now t=830.
fn at_heat_step(target: HeatLevel) -> Rig {
    let mut rig = Rig::new(target);
    rig.start_game();
    rig.do_add();
    rig.do_add();
    rig.do_add();
    assert_eq!(rig.outputs.last_line(2), Some("DO: HEAT"));
    assert_eq!(rig.now, 830);
    rig
}

#[test]
fn first_detent_counterclockwise_reads_low() {
    let mut rig = at_heat_step(HeatLevel::Mid);
    rig.advance(300);
    rig.turn(true);

    assert!(rig.outputs.showed("NOW: LOW"));
    assert_eq!(rig.outputs.colours.last(), Some(&(0, 0, 77)));
    assert!(rig.events().contains(&GameEvent::HeatLevelChanged {
        level: HeatLevel::Low,
        target: HeatLevel::Mid,
    }));
}

#[test]
fn returning_to_centre_after_moving_reads_mid_and_clears() {
    let mut rig = at_heat_step(HeatLevel::Mid);
    rig.advance(300);
    rig.turn(true); // t=1140 LOW
    rig.turn(false); // t=1160 back to centre: MID, hold starts

    assert_eq!(rig.outputs.last_line(2), Some("HOLD HEAT..."));
    assert_eq!(rig.outputs.last_line(3), Some("NOW: MID"));
    assert_eq!(rig.outputs.colours.last(), Some(&(77, 54, 0)));

    rig.advance(1200); // t=2370, cleared at 2360
    assert_eq!(rig.score(), 40);
    assert_eq!(rig.outputs.last_line(2), Some("HEAT OK!"));
    assert_eq!(rig.outputs.last_line(3), Some("MID matched"));
}

#[test]
fn clockwise_detent_reads_high() {
    let mut rig = at_heat_step(HeatLevel::High);
    rig.advance(300);
    rig.turn(false);
    rig.advance(1200);
    assert_eq!(rig.score(), 40);
}

#[test]
fn leaving_target_restarts_hold() {
    let mut rig = at_heat_step(HeatLevel::Low);
    rig.advance(300);
    rig.turn(true); // t=1140 hold starts
    rig.advance(600);
    rig.turn(false); // t=1760 MID, hold lost
    rig.turn(true); // t=1780 LOW again, hold restarts

    rig.advance(1180);
    assert_eq!(rig.now, 2970);
    assert_eq!(rig.score(), 30);
    rig.tick();
    assert_eq!(rig.score(), 40);
}

#[test]
fn heat_ok_freezes_game_until_shown() {
    let mut rig = at_heat_step(HeatLevel::Low);
    rig.advance(300);
    rig.turn(true); // t=1140
    rig.advance(1200); // cleared at t=2340
    assert_eq!(rig.score(), 40);
    assert_eq!(rig.outputs.last_line(2), Some("HEAT OK!"));

    // Inputs are ignored while frozen.
    rig.click();
    rig.advance(2460); // t=4830
    assert_eq!(rig.score(), 40);
    assert_eq!(rig.outputs.last_line(2), Some("HEAT OK!"));
    assert_eq!(rig.state(), StateId::Playing);

    rig.tick(); // t=4840, freeze over
    assert_eq!(rig.outputs.last_line(1), Some("STEP 5/10"));
    assert_eq!(rig.outputs.last_line(2), Some("DO: MIX"));
    let step_start = rig.app.session().map(|s| s.step_start_ms());
    assert_eq!(step_start, Some(4840));
}

#[test]
fn untouched_heat_step_times_out_after_nine_seconds() {
    let mut rig = at_heat_step(HeatLevel::Low);
    rig.advance(8990); // t=9820, past the generic limit
    assert_eq!(rig.state(), StateId::Playing);

    rig.tick();
    assert_eq!(rig.state(), StateId::GameOver);
    assert_eq!(rig.outputs.last_line(1), Some("HEAT TIMEOUT"));
    assert_eq!(rig.score(), 30);
}
