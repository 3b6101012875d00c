use serde::{Deserialize, Serialize};

/// Difficulty value of the middle anchor.
pub const MID_DIFFICULTY: f64 = 5.0;

/// Durations (ms) at difficulty 0, 5 and 10.
///
/// Anchors are not required to be monotonic; inverted curves are legal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DifficultyRange {
    pub min: f64,
    pub mid: f64,
    pub max: f64,
}

impl DifficultyRange {
    pub const fn new(min: f64, mid: f64, max: f64) -> Self {
        Self { min, mid, max }
    }

    /// A range that evaluates to `value` at every difficulty.
    pub const fn flat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    pub fn interpolate(&self, difficulty: f64) -> f64 {
        difficulty_range(difficulty, self)
    }
}

/// Piecewise-linear interpolation between the anchors of `range`.
///
/// Input is not clamped: difficulties outside 0-10 extrapolate along the
/// nearest segment. Difficulty 5 returns `range.mid` exactly.
pub fn difficulty_range(difficulty: f64, range: &DifficultyRange) -> f64 {
    if difficulty > MID_DIFFICULTY {
        range.mid + (range.max - range.mid) * (difficulty - MID_DIFFICULTY) / MID_DIFFICULTY
    } else if difficulty < MID_DIFFICULTY {
        range.mid + (range.mid - range.min) * (difficulty - MID_DIFFICULTY) / MID_DIFFICULTY
    } else {
        range.mid
    }
}
