use serde::Serialize;
use tracing::debug;

use crate::difficulty::{DifficultyRange, GameplayMods, MID_DIFFICULTY, difficulty_range};
use crate::error::Result;
use crate::judgement::{HitResult, Judgement, classify};
use crate::windows::BUILTIN_RANGES;
use crate::windows::legacy::{classic_windows, legacy_round};

/// The six judgement windows (ms) together with the configuration they were
/// computed from.
///
/// Every setter recomputes all six windows before returning, so the windows
/// never go stale. Mutation needs `&mut self`; share an instance across
/// threads only behind external synchronization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitWindowSet {
    perfect: f64,
    great: f64,
    good: f64,
    ok: f64,
    meh: f64,
    miss: f64,

    difficulty: f64,
    speed_multiplier: f64,
    difficulty_multiplier: f64,
    classic_mode: bool,
    score_v2: bool,
    converted: bool,
    special_override: Option<[DifficultyRange; 6]>,
}

impl HitWindowSet {
    /// Windows at difficulty 5 with no mods and no compatibility flags.
    pub fn new() -> Self {
        Self::from_difficulty(MID_DIFFICULTY)
    }

    pub fn from_difficulty(difficulty: f64) -> Self {
        let mut windows = Self {
            perfect: 0.0,
            great: 0.0,
            good: 0.0,
            ok: 0.0,
            meh: 0.0,
            miss: 0.0,
            difficulty,
            speed_multiplier: 1.0,
            difficulty_multiplier: 1.0,
            classic_mode: false,
            score_v2: false,
            converted: false,
            special_override: None,
        };
        windows.recompute();
        windows
    }

    pub fn with_mods(mut self, mods: &GameplayMods) -> Self {
        self.apply_mods(mods);
        self
    }

    pub fn set_difficulty(&mut self, difficulty: f64) {
        self.difficulty = difficulty;
        self.recompute();
    }

    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = multiplier;
        self.recompute();
    }

    pub fn set_difficulty_multiplier(&mut self, multiplier: f64) {
        self.difficulty_multiplier = multiplier;
        self.recompute();
    }

    /// Set both multipliers from a mod combination.
    pub fn apply_mods(&mut self, mods: &GameplayMods) {
        self.speed_multiplier = mods.speed_multiplier();
        self.difficulty_multiplier = mods.difficulty_multiplier();
        self.recompute();
    }

    pub fn set_classic_mode(&mut self, active: bool) {
        self.classic_mode = active;
        self.recompute();
    }

    pub fn set_score_v2(&mut self, active: bool) {
        self.score_v2 = active;
        self.recompute();
    }

    pub fn set_converted(&mut self, converted: bool) {
        self.converted = converted;
        self.recompute();
    }

    /// Replace the built-in curves with per-judgement ranges, Perfect first.
    /// `None` restores the built-in behaviour.
    pub fn set_special_override(&mut self, ranges: Option<[DifficultyRange; 6]>) {
        self.special_override = ranges;
        self.recompute();
    }

    pub fn window_for(&self, judgement: Judgement) -> f64 {
        match judgement {
            Judgement::Perfect => self.perfect,
            Judgement::Great => self.great,
            Judgement::Good => self.good,
            Judgement::Ok => self.ok,
            Judgement::Meh => self.meh,
            Judgement::Miss => self.miss,
        }
    }

    /// Window for an upstream result. Bonus and ignore results have no
    /// window and are rejected.
    pub fn window_for_result(&self, result: HitResult) -> Result<f64> {
        let judgement = Judgement::try_from(result)?;
        Ok(self.window_for(judgement))
    }

    /// All six windows, Perfect first.
    pub fn windows(&self) -> [(Judgement, f64); 6] {
        Judgement::ALL.map(|judgement| (judgement, self.window_for(judgement)))
    }

    pub fn classify(&self, abs_offset: f64) -> Judgement {
        classify(abs_offset, self)
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn difficulty_multiplier(&self) -> f64 {
        self.difficulty_multiplier
    }

    pub fn classic_mode(&self) -> bool {
        self.classic_mode
    }

    pub fn score_v2(&self) -> bool {
        self.score_v2
    }

    pub fn converted(&self) -> bool {
        self.converted
    }

    pub fn special_override(&self) -> Option<&[DifficultyRange; 6]> {
        self.special_override.as_ref()
    }

    fn recompute(&mut self) {
        let k = self.speed_multiplier / self.difficulty_multiplier;

        let values = if let Some(ranges) = &self.special_override {
            ranges.map(|range| difficulty_range(self.difficulty, &range) * k)
        } else if self.classic_mode && !self.score_v2 {
            classic_windows(self.difficulty, k, self.converted)
        } else {
            BUILTIN_RANGES.map(|range| legacy_round(difficulty_range(self.difficulty, &range) * k))
        };

        [
            self.perfect,
            self.great,
            self.good,
            self.ok,
            self.meh,
            self.miss,
        ] = values;

        debug!(
            "Recomputed hit windows (od {}, k {}): {:?}",
            self.difficulty, k, values
        );
    }
}

impl Default for HitWindowSet {
    fn default() -> Self {
        Self::new()
    }
}
