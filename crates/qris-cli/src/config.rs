//! CLI configuration, read from `qris.toml`.
//!
//! ```toml
//! base_payload = "000201010211...6304342D"
//! default_amount = 60000
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "qris.toml";

/// Overrides `base_payload` when set.
pub const BASE_PAYLOAD_ENV: &str = "QRIS_BASE_PAYLOAD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QrisConfig {
    /// Static merchant payload amounts get injected into.
    #[serde(default)]
    pub base_payload: Option<String>,

    /// Amount used by `inject` when `--amount` is omitted.
    #[serde(default)]
    pub default_amount: Option<u64>,
}

impl QrisConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path` if given (it must exist), otherwise `qris.toml` from
    /// the working directory if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Replaces `base_payload` with a non-empty override value.
    pub fn with_env_override(mut self, value: Option<String>) -> Self {
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            self.base_payload = Some(v.trim().to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_both_keys() {
        let config = QrisConfig::from_toml_str(
            "base_payload = \"0002015802ID\"\ndefault_amount = 60000\n",
        )
        .unwrap();
        assert_eq!(config.base_payload.as_deref(), Some("0002015802ID"));
        assert_eq!(config.default_amount, Some(60000));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(QrisConfig::from_toml_str("").unwrap(), QrisConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            QrisConfig::from_toml_str("merchant = \"x\"\n"),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn env_override() {
        let config = QrisConfig {
            base_payload: Some("file".into()),
            default_amount: None,
        };
        assert_eq!(
            config.clone().with_env_override(Some(" env ".into())).base_payload.as_deref(),
            Some("env")
        );
        assert_eq!(
            config.clone().with_env_override(Some("  ".into())).base_payload.as_deref(),
            Some("file")
        );
        assert_eq!(config.with_env_override(None).base_payload.as_deref(), Some("file"));
    }

    #[test]
    fn loads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_amount = 5000").unwrap();
        let config = QrisConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.default_amount, Some(5000));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = QrisConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
