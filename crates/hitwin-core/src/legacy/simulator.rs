use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::event::{HitEvent, HitObjectKind};
use crate::judgement::Judgement;
use crate::windows::HitWindowSet;

/// Maximum number of lanes tracked by the simulator.
pub const MAX_COLUMNS: usize = 20;

/// Points awarded for a perfectly timed object.
pub const MAX_POINTS_PER_OBJECT: u64 = 300;

/// Long-note tiers: (judgement, head factor, combined factor, points).
///
/// Each factor scales that judgement's current window. The first tier whose
/// head and combined limits both hold wins.
const LONG_NOTE_TIERS: [(Judgement, f64, f64, u64); 5] = [
    (Judgement::Perfect, 1.2, 2.4, 300),
    (Judgement::Great, 1.1, 2.2, 300),
    (Judgement::Good, 1.0, 2.0, 200),
    (Judgement::Ok, 1.0, 2.0, 100),
    (Judgement::Meh, 1.0, 2.0, 50),
];

/// Score V1 points for a single judgement.
pub fn points_for(judgement: Judgement) -> u64 {
    match judgement {
        Judgement::Perfect | Judgement::Great => 300,
        Judgement::Good => 200,
        Judgement::Ok => 100,
        Judgement::Meh => 50,
        Judgement::Miss => 0,
    }
}

/// Combined head + tail score of a long note, from absolute offsets (ms).
pub fn long_note_score(head: f64, tail: f64, windows: &HitWindowSet) -> u64 {
    let combined = head + tail;

    LONG_NOTE_TIERS
        .iter()
        .find(|(judgement, head_factor, combined_factor, _)| {
            let range = windows.window_for(*judgement);
            head <= range * head_factor && combined <= range * combined_factor
        })
        .map_or(0, |&(_, _, _, points)| points)
}

/// Accumulated Score V1 points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyScore {
    pub total_points: u64,
    pub max_points: u64,
}

impl LegacyScore {
    /// `total / max`, or `None` when nothing scorable was seen.
    pub fn accuracy(&self) -> Option<f64> {
        if self.max_points == 0 {
            None
        } else {
            Some(self.total_points as f64 / self.max_points as f64)
        }
    }
}

/// Single forward pass over a time-ordered event stream.
///
/// A long-note tail is scored together with the last head seen in the same
/// column. A tail with no pending head is scored with a head offset of 0;
/// malformed ordering is not rejected.
pub struct LegacyScoreSimulator<'a> {
    windows: &'a HitWindowSet,
    head_offsets: [Option<f64>; MAX_COLUMNS],
    score: LegacyScore,
}

impl<'a> LegacyScoreSimulator<'a> {
    pub fn new(windows: &'a HitWindowSet) -> Self {
        Self {
            windows,
            head_offsets: [None; MAX_COLUMNS],
            score: LegacyScore::default(),
        }
    }

    pub fn reset(&mut self) {
        self.head_offsets = [None; MAX_COLUMNS];
        self.score = LegacyScore::default();
    }

    pub fn process(&mut self, event: &HitEvent) -> Result<()> {
        let column = event.hit_object.column();
        if column >= MAX_COLUMNS {
            return Err(Error::ColumnOutOfRange {
                column,
                max: MAX_COLUMNS,
            });
        }

        let offset = event.abs_offset();
        match event.hit_object {
            HitObjectKind::RegularNote { .. } => {
                self.score.max_points += MAX_POINTS_PER_OBJECT;
                self.score.total_points += points_for(self.windows.classify(offset));
            }
            HitObjectKind::LongNoteHead { .. } => {
                self.head_offsets[column] = Some(offset);
            }
            HitObjectKind::LongNoteTail { .. } => {
                let head = self.head_offsets[column].take().unwrap_or_else(|| {
                    debug!("Long note tail in column {} without a pending head", column);
                    0.0
                });
                self.score.max_points += MAX_POINTS_PER_OBJECT;
                self.score.total_points += long_note_score(head, offset, self.windows);
            }
        }

        Ok(())
    }

    pub fn score(&self) -> LegacyScore {
        self.score
    }
}

/// Run a fresh simulation over `events`.
pub fn simulate<'a, I>(events: I, windows: &HitWindowSet) -> Result<LegacyScore>
where
    I: IntoIterator<Item = &'a HitEvent>,
{
    let mut simulator = LegacyScoreSimulator::new(windows);
    for event in events {
        simulator.process(event)?;
    }
    Ok(simulator.score())
}
