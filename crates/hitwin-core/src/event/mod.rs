//! Hit events consumed by aggregation and the legacy simulator.

mod loader;

pub use loader::*;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::judgement::Judgement;

/// The object an event was judged against, with its lane index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitObjectKind {
    RegularNote { column: usize },
    LongNoteHead { column: usize },
    LongNoteTail { column: usize },
}

impl HitObjectKind {
    pub fn column(&self) -> usize {
        match *self {
            Self::RegularNote { column }
            | Self::LongNoteHead { column }
            | Self::LongNoteTail { column } => column,
        }
    }

    pub fn note_kind(&self) -> NoteKind {
        match self {
            Self::RegularNote { .. } => NoteKind::RegularNote,
            Self::LongNoteHead { .. } => NoteKind::LongNoteHead,
            Self::LongNoteTail { .. } => NoteKind::LongNoteTail,
        }
    }
}

/// Column-less discriminant of `HitObjectKind`, used for partitioning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NoteKind {
    RegularNote,
    LongNoteHead,
    LongNoteTail,
}

impl NoteKind {
    pub const ALL: [NoteKind; 3] = [Self::RegularNote, Self::LongNoteHead, Self::LongNoteTail];

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for NoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A judged input. Positive offsets are late, zero and negative are early.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitEvent {
    pub result: Judgement,
    pub time_offset_ms: f64,
    pub hit_object: HitObjectKind,
    pub start_time: f64,
}

impl HitEvent {
    pub fn new(
        result: Judgement,
        time_offset_ms: f64,
        hit_object: HitObjectKind,
        start_time: f64,
    ) -> Self {
        Self {
            result,
            time_offset_ms,
            hit_object,
            start_time,
        }
    }

    pub fn is_late(&self) -> bool {
        self.time_offset_ms > 0.0
    }

    pub fn is_early(&self) -> bool {
        !self.is_late()
    }

    pub fn abs_offset(&self) -> f64 {
        self.time_offset_ms.abs()
    }

    pub fn note_kind(&self) -> NoteKind {
        self.hit_object.note_kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_offset_is_early() {
        let event = HitEvent::new(
            Judgement::Perfect,
            0.0,
            HitObjectKind::RegularNote { column: 0 },
            0.0,
        );
        assert!(event.is_early());
        assert!(!event.is_late());
    }

    #[test]
    fn test_column_and_kind() {
        let head = HitObjectKind::LongNoteHead { column: 3 };
        assert_eq!(head.column(), 3);
        assert_eq!(head.note_kind(), NoteKind::LongNoteHead);
    }

    #[test]
    fn test_hit_object_serde() {
        let json = r#"{"kind":"long_note_tail","column":2}"#;
        let kind: HitObjectKind = serde_json::from_str(json).unwrap();
        assert_eq!(kind, HitObjectKind::LongNoteTail { column: 2 });
        assert_eq!(serde_json::to_string(&kind).unwrap(), json);
    }

    #[test]
    fn test_note_kind_parse() {
        assert_eq!("long_note_head".parse::<NoteKind>().ok(), Some(NoteKind::LongNoteHead));
        assert_eq!(NoteKind::RegularNote.short_name(), "regular_note");
    }
}
