//! Hit window computation.
//!
//! `HitWindowSet` owns the six judgement windows and recomputes them from
//! its configuration on every change. Classic-mode formulas live in
//! `legacy` since they bypass the difficulty curves entirely.

mod legacy;
mod set;

pub use set::*;

use crate::difficulty::DifficultyRange;

/// Built-in window curves, Perfect first.
pub const BUILTIN_RANGES: [DifficultyRange; 6] = [
    DifficultyRange::new(22.4, 19.4, 13.9),
    DifficultyRange::new(64.0, 49.0, 34.0),
    DifficultyRange::new(97.0, 82.0, 67.0),
    DifficultyRange::new(127.0, 112.0, 97.0),
    DifficultyRange::new(151.0, 136.0, 121.0),
    DifficultyRange::new(188.0, 173.0, 158.0),
];
