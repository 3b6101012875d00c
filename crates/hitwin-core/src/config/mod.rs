//! Window configuration files.
//!
//! A `WindowConfig` describes everything a `HitWindowSet` is computed from:
//! difficulty, mods, compatibility flags and optional per-player custom
//! windows. Missing fields fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::difficulty::{DifficultyRange, GameplayMods, MID_DIFFICULTY};
use crate::error::{Error, Result};
use crate::windows::HitWindowSet;

/// Valid difficulty range; values outside are clamped before use.
pub const DIFFICULTY_BOUNDS: (f64, f64) = (0.0, 10.0);

/// One custom window: either a constant or a full difficulty curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindowSpec {
    Flat(f64),
    Curve(DifficultyRange),
}

impl WindowSpec {
    pub fn to_range(self) -> DifficultyRange {
        match self {
            Self::Flat(value) => DifficultyRange::flat(value),
            Self::Curve(range) => range,
        }
    }
}

/// Per-player window override, one entry per judgement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomWindows {
    pub perfect: WindowSpec,
    pub great: WindowSpec,
    pub good: WindowSpec,
    pub ok: WindowSpec,
    pub meh: WindowSpec,
    pub miss: WindowSpec,
}

impl CustomWindows {
    /// Constant windows, Perfect first.
    pub fn flat(values: [f64; 6]) -> Self {
        let [perfect, great, good, ok, meh, miss] = values.map(WindowSpec::Flat);
        Self {
            perfect,
            great,
            good,
            ok,
            meh,
            miss,
        }
    }

    /// Ranges in judgement order, Perfect first.
    pub fn ranges(&self) -> [DifficultyRange; 6] {
        [
            self.perfect,
            self.great,
            self.good,
            self.ok,
            self.meh,
            self.miss,
        ]
        .map(WindowSpec::to_range)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub difficulty: f64,
    pub mods: GameplayMods,
    pub classic_mode: bool,
    pub score_v2: bool,
    pub converted: bool,
    pub custom_windows: Option<CustomWindows>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            difficulty: MID_DIFFICULTY,
            mods: GameplayMods::default(),
            classic_mode: false,
            score_v2: false,
            converted: false,
            custom_windows: None,
        }
    }
}

impl WindowConfig {
    /// Load a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }

    /// Validate the config and compute its windows.
    ///
    /// Difficulty is clamped to 0-10; multipliers must be finite and positive.
    pub fn build(&self) -> Result<HitWindowSet> {
        let speed = self.mods.speed_multiplier();
        if !speed.is_finite() || speed <= 0.0 {
            return Err(Error::InvalidMultiplier {
                name: "speed",
                value: speed,
            });
        }
        if !self.difficulty.is_finite() {
            return Err(Error::ConfigParseError(format!(
                "difficulty must be finite, got {}",
                self.difficulty
            )));
        }

        let (low, high) = DIFFICULTY_BOUNDS;
        let difficulty = self.difficulty.clamp(low, high);
        if difficulty != self.difficulty {
            warn!(
                "Difficulty {} out of range, clamped to {}",
                self.difficulty, difficulty
            );
        }

        let mut windows = HitWindowSet::from_difficulty(difficulty).with_mods(&self.mods);
        windows.set_classic_mode(self.classic_mode);
        windows.set_score_v2(self.score_v2);
        windows.set_converted(self.converted);
        if let Some(custom) = &self.custom_windows {
            windows.set_special_override(Some(custom.ranges()));
        }

        Ok(windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judgement::Judgement;
    use std::io::Write;

    #[test]
    fn test_parse_empty_config() {
        let config = WindowConfig::parse_json("{}").unwrap();
        assert_eq!(config, WindowConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"{
            "difficulty": 8.0,
            "mods": {"clock_rate": 1.5, "hard_rock": true},
            "classic_mode": true,
            "converted": true,
            "custom_windows": {
                "perfect": 16,
                "great": {"min": 64, "mid": 49, "max": 34},
                "good": 80,
                "ok": 100,
                "meh": 120,
                "miss": 150
            }
        }"#;
        let config = WindowConfig::parse_json(content).unwrap();
        assert_eq!(config.difficulty, 8.0);
        assert!(config.mods.hard_rock);
        assert!(config.classic_mode);
        assert!(!config.score_v2);

        let custom = config.custom_windows.unwrap();
        assert_eq!(custom.perfect, WindowSpec::Flat(16.0));
        assert_eq!(
            custom.great,
            WindowSpec::Curve(DifficultyRange::new(64.0, 49.0, 34.0))
        );
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(matches!(
            WindowConfig::parse_json(r#"{"difficulty": "hard"}"#),
            Err(Error::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_build_default() {
        let windows = WindowConfig::default().build().unwrap();
        assert_eq!(windows, HitWindowSet::new());
    }

    #[test]
    fn test_build_classic() {
        let config = WindowConfig {
            classic_mode: true,
            ..Default::default()
        };
        let windows = config.build().unwrap();
        assert_eq!(windows.window_for(Judgement::Perfect), 16.5);
        assert_eq!(windows.window_for(Judgement::Great), 49.5);
    }

    #[test]
    fn test_build_clamps_difficulty() {
        let config = WindowConfig {
            difficulty: 14.0,
            ..Default::default()
        };
        let windows = config.build().unwrap();
        assert_eq!(windows.difficulty(), 10.0);
    }

    #[test]
    fn test_build_rejects_bad_rate() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = WindowConfig {
                mods: GameplayMods {
                    clock_rate: rate,
                    ..Default::default()
                },
                ..Default::default()
            };
            assert!(matches!(
                config.build(),
                Err(Error::InvalidMultiplier { name: "speed", .. })
            ));
        }
    }

    #[test]
    fn test_build_custom_windows() {
        let config = WindowConfig {
            difficulty: 2.0,
            custom_windows: Some(CustomWindows::flat([30.0, 50.0, 80.0, 100.0, 120.0, 150.0])),
            ..Default::default()
        };
        let windows = config.build().unwrap();
        assert_eq!(windows.window_for(Judgement::Perfect), 30.0);
        assert_eq!(windows.window_for(Judgement::Miss), 150.0);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"difficulty": 9.0, "score_v2": true}}"#).unwrap();

        let config = WindowConfig::load(file.path()).unwrap();
        assert_eq!(config.difficulty, 9.0);
        assert!(config.score_v2);
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = WindowConfig {
            custom_windows: Some(CustomWindows::flat([1.0, 2.0, 3.0, 4.0, 5.0, 6.0])),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(WindowConfig::parse_json(&json).unwrap(), config);
    }
}
