use serde::{Deserialize, Serialize};

use crate::event::{HitEvent, NoteKind};
use crate::judgement::Judgement;

/// Occurrences of one judgement, split by timing side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgementCounts {
    pub total: u32,
    pub early: u32,
    pub late: u32,
}

impl JudgementCounts {
    fn record(&mut self, late: bool) {
        self.total += 1;
        if late {
            self.late += 1;
        } else {
            self.early += 1;
        }
    }
}

/// Judgement breakdown of an event sequence (21 counters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCounts {
    pub total: u32,
    pub early: u32,
    pub late: u32,
    pub perfect: JudgementCounts,
    pub great: JudgementCounts,
    pub good: JudgementCounts,
    pub ok: JudgementCounts,
    pub meh: JudgementCounts,
    pub miss: JudgementCounts,
}

impl AggregateCounts {
    pub fn counts(&self, judgement: Judgement) -> &JudgementCounts {
        match judgement {
            Judgement::Perfect => &self.perfect,
            Judgement::Great => &self.great,
            Judgement::Good => &self.good,
            Judgement::Ok => &self.ok,
            Judgement::Meh => &self.meh,
            Judgement::Miss => &self.miss,
        }
    }

    fn counts_mut(&mut self, judgement: Judgement) -> &mut JudgementCounts {
        match judgement {
            Judgement::Perfect => &mut self.perfect,
            Judgement::Great => &mut self.great,
            Judgement::Good => &mut self.good,
            Judgement::Ok => &mut self.ok,
            Judgement::Meh => &mut self.meh,
            Judgement::Miss => &mut self.miss,
        }
    }

    fn record(&mut self, event: &HitEvent) {
        let late = event.is_late();
        self.counts_mut(event.result).record(late);
        self.total += 1;
        if late {
            self.late += 1;
        } else {
            self.early += 1;
        }
    }

    /// Live weighted accuracy (0.0-1.0), `None` for an empty breakdown.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }

        let points: u64 = Judgement::ALL
            .iter()
            .map(|j| u64::from(self.counts(*j).total) * u64::from(j.accuracy_weight()))
            .sum();
        let max = u64::from(self.total) * u64::from(Judgement::Perfect.accuracy_weight());

        Some(points as f64 / max as f64)
    }
}

/// Count judgements and early/late splits over `events`, in any order.
pub fn aggregate<'a, I>(events: I) -> AggregateCounts
where
    I: IntoIterator<Item = &'a HitEvent>,
{
    let mut counts = AggregateCounts::default();
    for event in events {
        counts.record(event);
    }
    counts
}

/// Aggregate only the events judged against `kind`.
pub fn aggregate_kind(events: &[HitEvent], kind: NoteKind) -> AggregateCounts {
    aggregate(events.iter().filter(|e| e.note_kind() == kind))
}

/// Breakdowns for all events and for each note-kind partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub all: AggregateCounts,
    pub regular_notes: AggregateCounts,
    pub long_note_heads: AggregateCounts,
    pub long_note_tails: AggregateCounts,
}

impl Breakdown {
    pub fn from_events(events: &[HitEvent]) -> Self {
        Self {
            all: aggregate(events),
            regular_notes: aggregate_kind(events, NoteKind::RegularNote),
            long_note_heads: aggregate_kind(events, NoteKind::LongNoteHead),
            long_note_tails: aggregate_kind(events, NoteKind::LongNoteTail),
        }
    }

    pub fn for_kind(&self, kind: NoteKind) -> &AggregateCounts {
        match kind {
            NoteKind::RegularNote => &self.regular_notes,
            NoteKind::LongNoteHead => &self.long_note_heads,
            NoteKind::LongNoteTail => &self.long_note_tails,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::HitObjectKind;

    fn note(result: Judgement, offset: f64) -> HitEvent {
        HitEvent::new(result, offset, HitObjectKind::RegularNote { column: 0 }, 0.0)
    }

    fn sample() -> Vec<HitEvent> {
        vec![
            note(Judgement::Perfect, -2.0),
            note(Judgement::Perfect, 0.0),
            note(Judgement::Perfect, 5.0),
            note(Judgement::Great, 30.0),
            note(Judgement::Meh, -120.0),
            note(Judgement::Miss, 200.0),
            HitEvent::new(
                Judgement::Good,
                -70.0,
                HitObjectKind::LongNoteHead { column: 1 },
                10.0,
            ),
            HitEvent::new(
                Judgement::Ok,
                90.0,
                HitObjectKind::LongNoteTail { column: 1 },
                20.0,
            ),
        ]
    }

    #[test]
    fn test_aggregate_counts() {
        let counts = aggregate(&sample());
        assert_eq!(counts.total, 8);
        assert_eq!(counts.early, 4);
        assert_eq!(counts.late, 4);
        assert_eq!(
            counts.perfect,
            JudgementCounts {
                total: 3,
                early: 2,
                late: 1
            }
        );
        assert_eq!(counts.miss.late, 1);
        assert_eq!(counts.meh.early, 1);
    }

    #[test]
    fn test_zero_offset_counts_as_early() {
        let counts = aggregate(&[note(Judgement::Great, 0.0)]);
        assert_eq!(counts.great.early, 1);
        assert_eq!(counts.great.late, 0);
    }

    #[test]
    fn test_additivity() {
        let counts = aggregate(&sample());
        let mut sum = 0;
        for judgement in Judgement::ALL {
            let c = counts.counts(judgement);
            assert_eq!(c.early + c.late, c.total);
            sum += c.total;
        }
        assert_eq!(sum, counts.total);
        assert_eq!(counts.early + counts.late, counts.total);
    }

    #[test]
    fn test_order_independent() {
        let mut events = sample();
        let forward = aggregate(&events);
        events.reverse();
        assert_eq!(aggregate(&events), forward);
    }

    #[test]
    fn test_empty() {
        let counts = aggregate(std::iter::empty::<&HitEvent>());
        assert_eq!(counts, AggregateCounts::default());
        assert_eq!(counts.accuracy(), None);
    }

    #[test]
    fn test_breakdown_partitions() {
        let breakdown = Breakdown::from_events(&sample());
        assert_eq!(breakdown.all.total, 8);
        assert_eq!(breakdown.regular_notes.total, 6);
        assert_eq!(breakdown.long_note_heads.good.early, 1);
        assert_eq!(breakdown.long_note_tails.ok.late, 1);
        assert_eq!(
            breakdown.for_kind(NoteKind::LongNoteTail),
            &breakdown.long_note_tails
        );

        let partition_total: u32 = NoteKind::ALL
            .iter()
            .map(|k| breakdown.for_kind(*k).total)
            .sum();
        assert_eq!(partition_total, breakdown.all.total);
    }

    #[test]
    fn test_accuracy() {
        let all_perfect = aggregate(&[note(Judgement::Perfect, 1.0), note(Judgement::Perfect, -1.0)]);
        assert_eq!(all_perfect.accuracy(), Some(1.0));

        let mixed = aggregate(&[note(Judgement::Perfect, 1.0), note(Judgement::Miss, 200.0)]);
        assert_eq!(mixed.accuracy(), Some(0.5));

        let great = aggregate(&[note(Judgement::Great, 20.0)]);
        assert!((great.accuracy().unwrap() - 300.0 / 305.0).abs() < 1e-12);
    }
}
