//! Runtime settings shared by the transcoders.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NurbsError, Result};
use crate::tolerance::Tolerance;

/// Bridge configuration, usually loaded from a TOML file.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report skipped entities through the warning sink.
    pub warnings: bool,
    /// Indent documents when writing them out.
    pub pretty: bool,
    pub tolerance: Tolerance,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| NurbsError::Parse(format!("config: {e}")))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Same configuration with warnings switched off.
    pub fn quiet(mut self) -> Self {
        self.warnings = false;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warnings: true,
            pretty: false,
            tolerance: Tolerance::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.warnings);
        assert!(!config.pretty);
        assert_eq!(config.tolerance.linear, Tolerance::DEFAULT_LINEAR);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            "warnings = false\n[tolerance]\nlinear = 0.001\n",
        )
        .unwrap();
        assert!(!config.warnings);
        assert_eq!(config.tolerance.linear, 0.001);
        assert_eq!(config.tolerance.weight, Tolerance::DEFAULT_WEIGHT);
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let err = Config::from_toml_str("warnings = \"sometimes\"").unwrap_err();
        assert!(matches!(err, NurbsError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pretty = true").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert!(config.pretty);
        assert!(config.warnings);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, NurbsError::Io(_)));
    }
}
