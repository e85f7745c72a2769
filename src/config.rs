//! Configuration structures for the color naming engine.
//!
//! The hue wheel partition is fixed at compile time; the scalar
//! thresholds that separate white/black/gray and drive the Light/Dark
//! modifiers can be tuned here.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use colornamer::NamingConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = NamingConfig::from_json_file(Path::new("naming.json"))?;
//!
//! // Or use defaults
//! let config = NamingConfig::default();
//! # Ok::<(), colornamer::NamingError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{range, thresholds};
use crate::{NamingError, Result};

/// Complete configuration for the naming engine.
///
/// Can be serialized to/from JSON for reproducible tuning experiments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Classification thresholds
    pub thresholds: NamingThresholds,
}

/// Scalar classification thresholds.
///
/// All fields are percentages in [0, 100]. Defaults reproduce the
/// standard naming scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NamingThresholds {
    /// Saturation below which a sample is achromatic (white/gray)
    pub achromatic_max_saturation: f32,

    /// Value above which an achromatic sample is white
    pub white_min_value: f32,

    /// Value below which any sample is black
    pub black_max_value: f32,

    /// Value above which a hued sample may take the "Light" prefix
    pub light_min_value: f32,

    /// Saturation below which a bright hued sample takes "Light"
    pub light_max_saturation: f32,

    /// Value below which a hued sample takes "Dark"
    pub dark_max_value: f32,
}

impl Default for NamingThresholds {
    fn default() -> Self {
        Self {
            achromatic_max_saturation: thresholds::ACHROMATIC_MAX_SATURATION,
            white_min_value: thresholds::WHITE_MIN_VALUE,
            black_max_value: thresholds::BLACK_MAX_VALUE,
            light_min_value: thresholds::LIGHT_MIN_VALUE,
            light_max_saturation: thresholds::LIGHT_MAX_SATURATION,
            dark_max_value: thresholds::DARK_MAX_VALUE,
        }
    }
}

impl NamingThresholds {
    /// Validate that all thresholds are percentages and mutually consistent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("achromatic_max_saturation", self.achromatic_max_saturation),
            ("white_min_value", self.white_min_value),
            ("black_max_value", self.black_max_value),
            ("light_min_value", self.light_min_value),
            ("light_max_saturation", self.light_max_saturation),
            ("dark_max_value", self.dark_max_value),
        ];
        for (name, value) in fields {
            if !value.is_finite() || !(0.0..=range::PERCENT).contains(&value) {
                return Err(NamingError::config_invalid(format!(
                    "{} must be a percentage in [0, {}], got {}",
                    name,
                    range::PERCENT,
                    value
                )));
            }
        }

        if self.black_max_value >= self.white_min_value {
            return Err(NamingError::config_invalid(format!(
                "black_max_value ({}) must be below white_min_value ({})",
                self.black_max_value, self.white_min_value
            )));
        }
        if self.dark_max_value >= self.light_min_value {
            return Err(NamingError::config_invalid(format!(
                "dark_max_value ({}) must be below light_min_value ({})",
                self.dark_max_value, self.light_min_value
            )));
        }

        Ok(())
    }
}

impl NamingConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, is not valid
    /// JSON, or contains inconsistent thresholds.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NamingError::config(format!("failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| NamingError::config(format!("failed to parse {}", path.display()), e))?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| NamingError::config("failed to serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| NamingError::config(format!("failed to write {}", path.display()), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_valid() {
        assert!(NamingThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_default_matches_constants() {
        let t = NamingThresholds::default();
        assert_eq!(t.achromatic_max_saturation, 20.0);
        assert_eq!(t.white_min_value, 80.0);
        assert_eq!(t.black_max_value, 20.0);
        assert_eq!(t.light_min_value, 80.0);
        assert_eq!(t.light_max_saturation, 60.0);
        assert_eq!(t.dark_max_value, 40.0);
    }

    #[test]
    fn test_out_of_range_field_rejected() {
        let thresholds = NamingThresholds {
            dark_max_value: 140.0,
            ..NamingThresholds::default()
        };
        assert!(matches!(
            thresholds.validate(),
            Err(NamingError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_inverted_ordering_rejected() {
        let thresholds = NamingThresholds {
            black_max_value: 90.0,
            ..NamingThresholds::default()
        };
        assert!(thresholds.validate().is_err());

        let thresholds = NamingThresholds {
            dark_max_value: 85.0,
            ..NamingThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = NamingConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: NamingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
