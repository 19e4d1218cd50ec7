//! Configuration for the color extraction pipeline.
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use extract_colors::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("colors.json"))?;
//!
//! // Or use defaults
//! let config = ExtractionConfig::default();
//! # Ok::<(), extract_colors::ExtractionError>(())
//! ```
//!
//! Fields missing from a JSON file take their default value.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DEFAULT_TOP_N, MAX_THUMBNAIL_DIMENSION};
use crate::error::{ExtractionError, Result};

/// Tunable parameters for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of most common colors to report
    pub top_n: usize,

    /// Longest side of the thumbnail the colors are counted on
    pub max_dimension: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            max_dimension: MAX_THUMBNAIL_DIMENSION,
        }
    }
}

impl ExtractionConfig {
    /// Default configuration reporting `top_n` colors
    pub fn with_top_n(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(ExtractionError::invalid_parameter("top_n", self.top_n));
        }
        if self.max_dimension == 0 {
            return Err(ExtractionError::invalid_parameter(
                "max_dimension",
                self.max_dimension,
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExtractionError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ExtractionError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExtractionError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ExtractionError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("extract_colors_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_config() {
        let config = ExtractionConfig::default();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.max_dimension, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            ExtractionConfig::with_top_n(0).validate(),
            Err(ExtractionError::InvalidParameter { .. })
        ));

        let config = ExtractionConfig {
            max_dimension: 0,
            ..ExtractionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ExtractionConfig = serde_json::from_str(r#"{ "top_n": 3 }"#).unwrap();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.max_dimension, MAX_THUMBNAIL_DIMENSION);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = temp_path("config_roundtrip.json");
        let config = ExtractionConfig {
            top_n: 5,
            max_dimension: 64,
        };

        config.to_json_file(&path).unwrap();
        let loaded = ExtractionConfig::from_json_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = ExtractionConfig::from_json_file(Path::new("no/such/config.json"));
        assert!(matches!(result, Err(ExtractionError::ConfigError { .. })));
    }

    #[test]
    fn test_from_json_file_invalid_value() {
        let path = temp_path("config_invalid.json");
        std::fs::write(&path, r#"{ "top_n": 0 }"#).unwrap();
        let result = ExtractionConfig::from_json_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ExtractionError::InvalidParameter { .. })));
    }
}
