//! Screen layouts shown by the state handlers.

use crate::app::screen::Screen;
use crate::game::{Action, Difficulty, GameOverReason, GameSession, HeatLevel};

pub const TITLE: &str = "COOKING GAME";

pub fn menu(selected: Difficulty) -> Screen {
    let mut screen = Screen::new();
    screen.push_line(TITLE);
    for d in Difficulty::ALL {
        let marker = if d == selected { ">" } else { " " };
        screen.push_line(&format!("{marker} {}", d.name()));
    }
    screen
}

/// First two lines shared by every in-game screen.
fn header(session: &GameSession) -> [String; 2] {
    [
        format!("{} MODE", session.difficulty().name()),
        format!("STEP {}/{}", session.step_number(), session.total_steps()),
    ]
}

fn with_header(session: &GameSession, third: &str, fourth: &str) -> Screen {
    let [mode, step] = header(session);
    Screen::from_lines(&[mode.as_str(), step.as_str(), third, fourth])
}

pub fn step_prompt(session: &GameSession, action: Action) -> Screen {
    with_header(
        session,
        &format!("DO: {}", action.name()),
        &format!("SCORE: {}", session.score()),
    )
}

pub fn heat_prompt(session: &GameSession, target: HeatLevel) -> Screen {
    with_header(session, "DO: HEAT", &format!("SET HEAT: {}", target.name()))
}

pub fn heat_live(session: &GameSession, target: HeatLevel, level: HeatLevel) -> Screen {
    with_header(
        session,
        &format!("SET HEAT: {}", target.name()),
        &format!("NOW: {}", level.name()),
    )
}

pub fn heat_hold(session: &GameSession, level: HeatLevel) -> Screen {
    with_header(session, "HOLD HEAT...", &format!("NOW: {}", level.name()))
}

pub fn heat_ok(session: &GameSession, level: HeatLevel) -> Screen {
    with_header(session, "HEAT OK!", &format!("{} matched", level.name()))
}

pub fn game_over(reason: Option<GameOverReason>, score: u32) -> Screen {
    let reason = reason.map_or("", GameOverReason::as_str);
    let score = format!("SCORE: {score}");
    Screen::from_lines(&["GAME OVER!", reason, score.as_str(), "BTN: Menu"])
}

pub fn win(score: u32) -> Screen {
    let score = format!("SCORE: {score}");
    Screen::from_lines(&["YOU WIN!", "Cooking done :)", score.as_str(), "BTN: Menu"])
}
