//! Game rules: recipes, the session aggregate, the HEAT challenge, and the
//! resolver that turns gestures into actions.
//!
//! Everything here is pure: no I/O, no clock reads. Time arrives as `u32`
//! milliseconds and is compared with `wrapping_sub`.

pub mod heat;
pub mod recipe;
pub mod resolver;
pub mod session;

pub use heat::{HeatChallenge, HeatLevel};
pub use recipe::{Action, Difficulty, Recipe};
pub use resolver::{ActionResolver, Resolution};
pub use session::{GameOverReason, GameSession};
