use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::event::{HitEvent, HitObjectKind};
use crate::judgement::{HitResult, Judgement};

/// Event as recorded upstream, before bonus results are filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawHitEvent {
    pub result: HitResult,
    pub time_offset_ms: f64,
    pub hit_object: HitObjectKind,
    #[serde(default)]
    pub start_time: f64,
}

impl RawHitEvent {
    /// `None` for results without a timing judgement.
    pub fn into_judged(self) -> Option<HitEvent> {
        let result = Judgement::try_from(self.result).ok()?;
        Some(HitEvent::new(
            result,
            self.time_offset_ms,
            self.hit_object,
            self.start_time,
        ))
    }
}

/// Load events from a JSON array file.
pub fn load_events<P: AsRef<Path>>(path: P) -> Result<Vec<HitEvent>> {
    let content = fs::read_to_string(path)?;
    parse_events(&content)
}

/// Parse a JSON array of events.
///
/// Bonus and ignore results are dropped and the rest is stably sorted by
/// `start_time`, which the legacy simulator relies on.
pub fn parse_events(content: &str) -> Result<Vec<HitEvent>> {
    let raw: Vec<RawHitEvent> = serde_json::from_str(content)?;
    let total = raw.len();

    let mut events: Vec<HitEvent> = raw.into_iter().filter_map(RawHitEvent::into_judged).collect();
    if events.len() != total {
        debug!(
            "Dropped {} events without a timing judgement",
            total - events.len()
        );
    }

    events.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"result": "Great", "time_offset_ms": 12.0, "hit_object": {"kind": "regular_note", "column": 1}, "start_time": 500.0},
        {"result": "SmallBonus", "time_offset_ms": 0.0, "hit_object": {"kind": "regular_note", "column": 1}, "start_time": 250.0},
        {"result": "Perfect", "time_offset_ms": -3.0, "hit_object": {"kind": "long_note_head", "column": 0}, "start_time": 100.0}
    ]"#;

    #[test]
    fn test_parse_events_filters_and_sorts() {
        let events = parse_events(SAMPLE).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].result, Judgement::Perfect);
        assert_eq!(events[0].hit_object, HitObjectKind::LongNoteHead { column: 0 });
        assert_eq!(events[1].result, Judgement::Great);
        assert_eq!(events[1].start_time, 500.0);
    }

    #[test]
    fn test_parse_events_missing_start_time() {
        let json = r#"[{"result": "Miss", "time_offset_ms": 200.0, "hit_object": {"kind": "long_note_tail", "column": 4}}]"#;
        let events = parse_events(json).unwrap();
        assert_eq!(events[0].start_time, 0.0);
    }

    #[test]
    fn test_parse_events_invalid_json() {
        assert!(parse_events("{not json").is_err());
    }

    #[test]
    fn test_load_events_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let events = load_events(file.path()).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_load_events_missing_file() {
        assert!(load_events("/nonexistent/events.json").is_err());
    }
}
