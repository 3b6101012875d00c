use thiserror::Error;

use crate::judgement::HitResult;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid judgement: {0} has no hit window")]
    InvalidJudgement(HitResult),

    #[error("Column {column} out of range (max {max})")]
    ColumnOutOfRange { column: usize, max: usize },

    #[error("Invalid {name} multiplier: {value}")]
    InvalidMultiplier { name: &'static str, value: f64 },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
