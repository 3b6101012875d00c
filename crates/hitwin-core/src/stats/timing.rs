use serde::{Deserialize, Serialize};

use crate::event::HitEvent;
use crate::judgement::Judgement;

/// Offset statistics over non-Miss events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub count: usize,
    /// Signed mean; positive means the player tends to hit late.
    pub mean_ms: f64,
    pub mean_abs_ms: f64,
    pub max_abs_ms: f64,
    /// Population standard deviation of signed offsets.
    pub stddev_ms: f64,
    pub unstable_rate: f64,
}

impl TimingStats {
    pub fn from_events<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a HitEvent>,
    {
        let offsets: Vec<f64> = events
            .into_iter()
            .filter(|e| e.result != Judgement::Miss)
            .map(|e| e.time_offset_ms)
            .collect();

        if offsets.is_empty() {
            return Self::default();
        }

        let count = offsets.len();
        let n = count as f64;

        let mut sum = 0.0;
        let mut sum_abs = 0.0;
        let mut max_abs: f64 = 0.0;
        for &offset in &offsets {
            sum += offset;
            sum_abs += offset.abs();
            max_abs = max_abs.max(offset.abs());
        }
        let mean_ms = sum / n;

        let variance = offsets
            .iter()
            .map(|offset| {
                let d = offset - mean_ms;
                d * d
            })
            .sum::<f64>()
            / n;
        let stddev_ms = variance.sqrt();

        Self {
            count,
            mean_ms,
            mean_abs_ms: sum_abs / n,
            max_abs_ms: max_abs,
            stddev_ms,
            unstable_rate: stddev_ms * 10.0,
        }
    }
}
