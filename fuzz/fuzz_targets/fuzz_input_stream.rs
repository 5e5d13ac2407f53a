//! Fuzz target: whole game driven by arbitrary input bytes
//!
//! Every 4 bytes become one tick: `[lines+button, dt, accel x, accel z]`.
//! Verifies:
//! - No panics for any input stream or clock step
//! - Score is always `step_index × points`
//! - Every rendered line fits the 21-character display
//!
//! cargo fuzz run fuzz_input_stream

#![no_main]

use cookgame::app::events::GameEvent;
use cookgame::app::ports::{DisplayPort, EventSink, IndicatorPort, InputFrame, InputPort};
use cookgame::app::screen::{LINE_CHARS, Screen};
use cookgame::app::service::GameService;
use cookgame::config::GameConfig;
use cookgame::drivers::indicator::Rgb;
use cookgame::error::SensorError;
use cookgame::game::HeatLevel;
use cookgame::game::heat::FixedTarget;
use cookgame::sensors::gesture::AccelReading;
use libfuzzer_sys::fuzz_target;

struct Replay(InputFrame);

impl InputPort for Replay {
    fn read_inputs(&mut self, _now_ms: u32) -> InputFrame {
        self.0
    }
}

struct Screens;

impl DisplayPort for Screens {
    fn render(&mut self, screen: &Screen) {
        assert!(screen.lines().all(|l| l.len() <= LINE_CHARS));
    }
}

impl IndicatorPort for Screens {
    fn set_colour(&mut self, _colour: Rgb) {}
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &GameEvent) {}
}

fn frame(bits: u8, x: u8, z: u8) -> InputFrame {
    let axis = |v: u8| (f32::from(v) - 128.0) / 4.0;
    InputFrame {
        encoder_a: bits & 0x01 != 0,
        encoder_b: bits & 0x02 != 0,
        button_pressed: bits & 0x04 != 0,
        accel: if bits & 0x80 != 0 {
            Err(SensorError::BusFailed)
        } else {
            Ok(AccelReading::new(axis(x), 0.0, axis(z)))
        },
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&seed, rest)) = data.split_first() else {
        return;
    };

    let target = HeatLevel::TARGETS[usize::from(seed) % HeatLevel::TARGETS.len()];
    let mut app =
        GameService::with_target_source(GameConfig::default(), Box::new(FixedTarget(target)));
    let mut now = u32::from(seed).wrapping_mul(16_843_009).wrapping_neg();
    app.start(now, &mut Screens, &mut Discard);

    for chunk in rest.chunks_exact(4) {
        now = now.wrapping_add(u32::from(chunk[1]) * 4);
        let mut inputs = Replay(frame(chunk[0], chunk[2], chunk[3]));
        app.tick(now, &mut inputs, &mut Screens, &mut Discard);

        if let Some(session) = app.session() {
            let points = session.difficulty().points();
            assert_eq!(session.score(), session.step_index() as u32 * points);
        }
    }
});
