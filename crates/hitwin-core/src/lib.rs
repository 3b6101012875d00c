//! # hitwin-core
//!
//! Hit window resolution and judgement aggregation for lane-based rhythm games.
//!
//! This crate provides:
//! - Difficulty curves and mod multipliers
//! - `HitWindowSet`, including classic (score V1) window formulas and custom overrides
//! - Offset classification into Perfect..Miss
//! - Early/late and per-note-kind judgement breakdowns, timing statistics
//! - A Score V1 replay for legacy accuracy display
//!
//! Everything here is synchronous and performs no I/O apart from the
//! explicit file loaders in `config` and `event`.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod event;
pub mod export;
pub mod judgement;
pub mod legacy;
pub mod stats;
pub mod windows;

// Re-export from config module
pub use config::{CustomWindows, WindowConfig, WindowSpec};

// Re-export from difficulty module
pub use difficulty::{DifficultyRange, GameplayMods, difficulty_range};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from event module
pub use event::{HitEvent, HitObjectKind, NoteKind, RawHitEvent, load_events, parse_events};

// Re-export from judgement module
pub use judgement::{HitResult, Judgement, classify, classify_offset};

// Re-export from legacy module
pub use legacy::{
    LegacyScore, LegacyScoreSimulator, MAX_COLUMNS, long_note_score, points_for, simulate,
};

// Re-export from stats module
pub use stats::{
    AggregateCounts, Breakdown, JudgementCounts, PlayReport, TimingStats, aggregate,
    aggregate_kind,
};

// Re-export from windows module
pub use windows::{BUILTIN_RANGES, HitWindowSet};
