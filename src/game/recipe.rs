//! Actions, difficulty levels, and the fixed recipe table.

use serde::{Deserialize, Serialize};

/// One physical gesture the player is asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Press the button.
    Add,
    /// Shake the device repeatedly.
    Mix,
    /// Turn the dial to the requested heat and hold it.
    Heat,
    /// Tip the device sideways and hold it.
    Tilt,
}

impl Action {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Mix => "MIX",
            Self::Heat => "HEAT",
            Self::Tilt => "TILT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Difficulty {
    #[default]
    Easy = 0,
    Normal = 1,
    Hard = 2,
}

impl Difficulty {
    pub const COUNT: usize = 3;
    pub const ALL: [Difficulty; Self::COUNT] = [Self::Easy, Self::Normal, Self::Hard];

    /// Map a menu index to a difficulty, wrapping modulo [`Self::COUNT`].
    pub const fn from_index(idx: usize) -> Self {
        Self::ALL[idx % Self::COUNT]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Normal => "NORMAL",
            Self::Hard => "HARD",
        }
    }

    /// Per-step budget for every action except HEAT.
    pub const fn time_limit_ms(self) -> u32 {
        match self {
            Self::Easy => 5000,
            Self::Normal => 4000,
            Self::Hard => 3000,
        }
    }

    /// Points awarded for each confirmed step.
    pub const fn points(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Normal => 15,
            Self::Hard => 20,
        }
    }

    /// Whether shaking during an ADD step ends the game.
    pub const fn punishes_shake(self) -> bool {
        !matches!(self, Self::Easy)
    }

    pub const fn recipe(self) -> Recipe {
        Recipe::for_difficulty(self)
    }
}

use Action::{Add, Heat, Mix, Tilt};

const EASY_STEPS: [Action; 10] = [Add, Add, Add, Heat, Mix, Tilt, Add, Mix, Tilt, Add];

const NORMAL_STEPS: [Action; 12] = [
    Add, Add, Mix, Heat, Tilt, Add, Mix, Heat, Tilt, Mix, Add, Mix,
];

const HARD_STEPS: [Action; 15] = [
    Add, Mix, Add, Heat, Tilt, Tilt, Mix, Add, Heat, Mix, Tilt, Heat, Add, Mix, Tilt,
];

/// Read-only ordered action sequence for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    steps: &'static [Action],
}

impl Recipe {
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        let steps: &'static [Action] = match difficulty {
            Difficulty::Easy => &EASY_STEPS,
            Difficulty::Normal => &NORMAL_STEPS,
            Difficulty::Hard => &HARD_STEPS,
        };
        Self { steps }
    }

    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Action> {
        self.steps.get(index).copied()
    }

    pub fn steps(&self) -> &'static [Action] {
        self.steps
    }
}
