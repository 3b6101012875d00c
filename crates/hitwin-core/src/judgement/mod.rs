//! Judgement types and offset classification.
//!
//! - `Judgement` - the six timed judgements (Perfect..Miss)
//! - `HitResult` - upstream result vocabulary including bonus results
//! - `classify` / `classify_offset` - map a timing offset to a judgement

mod classifier;
mod enums;

pub use classifier::*;
pub use enums::*;
