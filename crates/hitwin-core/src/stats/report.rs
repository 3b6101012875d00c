use serde::Serialize;

use crate::error::Result;
use crate::event::HitEvent;
use crate::legacy::{LegacyScore, simulate};
use crate::stats::{Breakdown, TimingStats};
use crate::windows::HitWindowSet;

/// Every statistic derived from one play.
#[derive(Debug, Clone, Serialize)]
pub struct PlayReport {
    pub windows: HitWindowSet,
    pub breakdown: Breakdown,
    pub timing: TimingStats,
    pub accuracy: Option<f64>,
    pub legacy: LegacyScore,
    pub legacy_accuracy: Option<f64>,
}

impl PlayReport {
    /// `events` must be time-ordered for the legacy score to be meaningful.
    pub fn build(events: &[HitEvent], windows: &HitWindowSet) -> Result<Self> {
        let breakdown = Breakdown::from_events(events);
        let legacy = simulate(events, windows)?;

        Ok(Self {
            windows: windows.clone(),
            breakdown,
            timing: TimingStats::from_events(events),
            accuracy: breakdown.all.accuracy(),
            legacy,
            legacy_accuracy: legacy.accuracy(),
        })
    }
}
