use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::SpeedCurve;
use crate::error::{ConfigError, EngineError};

/// Default board side length, walls included.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Shortest snake the engine will spawn.
pub const MIN_INITIAL_LENGTH: usize = 3;

/// Longest snake that still fits the largest representable grid.
pub const MAX_INITIAL_LENGTH: usize = (u16::MAX / 2) as usize;

/// Score awarded per food item.
pub const DEFAULT_POINTS_PER_FOOD: u32 = 10;

/// Base tick interval in milliseconds.
pub const DEFAULT_BASE_INTERVAL_MS: u64 = 200;

/// Minimum tick interval in milliseconds.
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 50;

/// Score needed to take one second off the tick interval.
pub const DEFAULT_SPEED_DIVISOR: u32 = 500;

/// Engine tunables. Every field falls back to its default when absent from
/// a config file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub grid_size: u16,
    pub initial_length: usize,
    pub points_per_food: u32,
    pub base_interval_ms: u64,
    pub min_interval_ms: u64,
    pub speed_divisor: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_length: MIN_INITIAL_LENGTH,
            points_per_food: DEFAULT_POINTS_PER_FOOD,
            base_interval_ms: DEFAULT_BASE_INTERVAL_MS,
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
            speed_divisor: DEFAULT_SPEED_DIVISOR,
        }
    }
}

impl EngineConfig {
    /// Default configuration on a `size` x `size` board.
    #[must_use]
    pub fn with_grid_size(size: u16) -> Self {
        Self {
            grid_size: size,
            ..Self::default()
        }
    }

    /// Loads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|error| match error {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses and validates a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: Default::default(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Smallest board that fits a spawned snake of `initial_length` inside
    /// the wall ring with at least one free cell left for food.
    ///
    /// Computed in `usize`; the result may exceed any representable grid.
    #[must_use]
    pub fn min_grid_size(&self) -> usize {
        // Head sits at column N/2 and the body extends left to column
        // N/2 - (len - 1), which must stay at or right of column 1.
        let from_layout = self.initial_length.saturating_mul(2);
        // (N - 2)^2 interior cells must exceed the snake length.
        let from_food = self.initial_length.isqrt().saturating_add(3);
        from_layout.max(from_food).max(5)
    }

    /// Checks invariants the engine relies on.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.initial_length < MIN_INITIAL_LENGTH {
            return Err(EngineError::InitialLengthTooShort {
                length: self.initial_length,
                min: MIN_INITIAL_LENGTH,
            });
        }

        let min = self.min_grid_size();
        let Ok(min) = u16::try_from(min) else {
            return Err(EngineError::InitialLengthTooLong {
                length: self.initial_length,
                max: MAX_INITIAL_LENGTH,
            });
        };
        if self.grid_size < min {
            return Err(EngineError::GridTooSmall {
                size: self.grid_size,
                min,
            });
        }

        if self.speed_divisor == 0 {
            return Err(EngineError::InvalidSpeedCurve("speed divisor must be positive"));
        }
        if self.min_interval_ms == 0 {
            return Err(EngineError::InvalidSpeedCurve("minimum interval must be positive"));
        }
        if self.min_interval_ms > self.base_interval_ms {
            return Err(EngineError::InvalidSpeedCurve(
                "minimum interval exceeds base interval",
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn speed_curve(&self) -> SpeedCurve {
        SpeedCurve {
            base_interval: Duration::from_millis(self.base_interval_ms),
            min_interval: Duration::from_millis(self.min_interval_ms),
            speed_divisor: self.speed_divisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{EngineConfig, MAX_INITIAL_LENGTH};
    use crate::error::{ConfigError, EngineError};

    #[test]
    fn defaults_match_reference_constants() {
        let config = EngineConfig::default();

        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_length, 3);
        assert_eq!(config.points_per_food, 10);
        assert_eq!(config.base_interval_ms, 200);
        assert_eq!(config.min_interval_ms, 50);
        assert_eq!(config.speed_divisor, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = EngineConfig::from_json(r#"{ "grid_size": 12 }"#).expect("valid config");

        assert_eq!(config, EngineConfig::with_grid_size(12));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let error = EngineConfig::from_json(r#"{ "grid": 12 }"#).unwrap_err();

        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn minimum_grid_for_default_snake_is_six() {
        let config = EngineConfig::default();

        assert_eq!(config.min_grid_size(), 6);
        assert!(EngineConfig::with_grid_size(6).validate().is_ok());
        assert_eq!(
            EngineConfig::with_grid_size(5).validate(),
            Err(EngineError::GridTooSmall { size: 5, min: 6 })
        );
    }

    #[test]
    fn short_snake_is_rejected() {
        let config = EngineConfig {
            initial_length: 2,
            ..EngineConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(EngineError::InitialLengthTooShort { length: 2, min: 3 })
        ));
    }

    #[test]
    fn oversized_snake_is_rejected_without_looping() {
        let config = EngineConfig {
            initial_length: usize::MAX,
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(EngineError::InitialLengthTooLong {
                length: usize::MAX,
                max: MAX_INITIAL_LENGTH,
            })
        );
    }

    #[test]
    fn minimum_grid_keeps_long_snakes_inside_walls() {
        let longest = EngineConfig {
            initial_length: MAX_INITIAL_LENGTH,
            grid_size: u16::MAX,
            ..EngineConfig::default()
        };
        assert_eq!(longest.min_grid_size(), 65_534);
        assert!(longest.validate().is_ok());

        let too_long = EngineConfig {
            initial_length: 40_000,
            grid_size: u16::MAX,
            ..EngineConfig::default()
        };
        assert_eq!(too_long.min_grid_size(), 80_000);
        assert!(matches!(
            too_long.validate(),
            Err(EngineError::InitialLengthTooLong { length: 40_000, .. })
        ));
    }

    #[test]
    fn inverted_speed_curve_is_rejected() {
        let config = EngineConfig {
            base_interval_ms: 40,
            ..EngineConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidSpeedCurve(_))
        ));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = unique_test_path("load");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, r#"{ "grid_size": 15, "points_per_food": 5 }"#)
            .expect("test file write should succeed");

        let config = EngineConfig::load(&path).expect("load should succeed");
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.points_per_food, 5);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = unique_test_path("missing");

        let error = EngineConfig::load(&path).unwrap_err();
        match error {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }
}
