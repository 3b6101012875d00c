use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

use crate::error::Error;

/// Judgement assigned to a single timed input, ordered from tightest to most lenient.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
#[strum(ascii_case_insensitive)]
pub enum Judgement {
    Perfect = 0,
    Great = 1,
    Good = 2,
    Ok = 3,
    Meh = 4,
    Miss = 5,
}

impl Judgement {
    /// All judgements in increasing leniency order.
    pub const ALL: [Judgement; 6] = [
        Self::Perfect,
        Self::Great,
        Self::Good,
        Self::Ok,
        Self::Meh,
        Self::Miss,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Index into per-judgement arrays (`0` = Perfect, `5` = Miss).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Weight used by the live accuracy formula.
    pub fn accuracy_weight(&self) -> u32 {
        match self {
            Self::Perfect => 305,
            Self::Great => 300,
            Self::Good => 200,
            Self::Ok => 100,
            Self::Meh => 50,
            Self::Miss => 0,
        }
    }
}

impl std::fmt::Display for Judgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Result vocabulary produced upstream by input processing.
///
/// Only the six timed judgements have a hit window. Bonus and ignore results
/// must be filtered out before classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum HitResult {
    Perfect,
    Great,
    Good,
    Ok,
    Meh,
    Miss,
    IgnoreHit,
    SmallBonus,
    LargeBonus,
}

impl HitResult {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Whether this result carries a timing judgement.
    pub fn is_judgement(&self) -> bool {
        Judgement::try_from(*self).is_ok()
    }
}

impl std::fmt::Display for HitResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl From<Judgement> for HitResult {
    fn from(judgement: Judgement) -> Self {
        match judgement {
            Judgement::Perfect => Self::Perfect,
            Judgement::Great => Self::Great,
            Judgement::Good => Self::Good,
            Judgement::Ok => Self::Ok,
            Judgement::Meh => Self::Meh,
            Judgement::Miss => Self::Miss,
        }
    }
}

impl TryFrom<HitResult> for Judgement {
    type Error = Error;

    fn try_from(result: HitResult) -> Result<Self, Self::Error> {
        match result {
            HitResult::Perfect => Ok(Self::Perfect),
            HitResult::Great => Ok(Self::Great),
            HitResult::Good => Ok(Self::Good),
            HitResult::Ok => Ok(Self::Ok),
            HitResult::Meh => Ok(Self::Meh),
            HitResult::Miss => Ok(Self::Miss),
            HitResult::IgnoreHit | HitResult::SmallBonus | HitResult::LargeBonus => {
                Err(Error::InvalidJudgement(result))
            }
        }
    }
}
