use serde::{Deserialize, Serialize};

/// Difficulty multiplier applied by Hard Rock (windows shrink).
pub const HARD_ROCK_MULTIPLIER: f64 = 1.4;

/// Difficulty multiplier applied by Easy (windows widen).
pub const EASY_MULTIPLIER: f64 = 1.0 / 1.4;

/// Clock rate of Double Time.
pub const DOUBLE_TIME_RATE: f64 = 1.5;

/// Clock rate of Half Time.
pub const HALF_TIME_RATE: f64 = 0.75;

/// Mods that affect hit windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayMods {
    /// Playback rate (1.5 for DT, 0.75 for HT).
    pub clock_rate: f64,
    pub hard_rock: bool,
    pub easy: bool,
}

impl GameplayMods {
    pub fn new() -> Self {
        Self {
            clock_rate: 1.0,
            hard_rock: false,
            easy: false,
        }
    }

    pub fn double_time() -> Self {
        Self {
            clock_rate: DOUBLE_TIME_RATE,
            ..Self::new()
        }
    }

    pub fn half_time() -> Self {
        Self {
            clock_rate: HALF_TIME_RATE,
            ..Self::new()
        }
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.clock_rate
    }

    /// Hard Rock takes precedence when both Hard Rock and Easy are set.
    pub fn difficulty_multiplier(&self) -> f64 {
        if self.hard_rock {
            HARD_ROCK_MULTIPLIER
        } else if self.easy {
            EASY_MULTIPLIER
        } else {
            1.0
        }
    }
}

impl Default for GameplayMods {
    fn default() -> Self {
        Self::new()
    }
}
