//! Difficulty-dependent inputs to hit window computation.
//!
//! - `DifficultyRange` - three-anchor curve evaluated against a 0-10 difficulty
//! - `GameplayMods` - rate and window-scaling mods reduced to the two multipliers

mod mods;
mod range;

pub use mods::*;
pub use range::*;
