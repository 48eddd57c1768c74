//! Configuration loaded from `config.toml`.
//!
//! Every field has a default, so an empty or missing file is valid:
//!
//! ```toml
//! [transcript]
//! seed = true
//! trim_content = true
//!
//! [display]
//! time_format = "%H:%M"
//! color = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ChatError, Result};
use crate::presentation::{format_time, DEFAULT_TIME_FORMAT};

const APP_DIR: &str = "rolechat";
const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChatConfig {
    pub transcript: TranscriptConfig,
    pub display: DisplayConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Start sessions with the example conversation.
    pub seed: bool,
    /// Store message content trimmed of surrounding whitespace.
    pub trim_content: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            seed: true,
            trim_content: true,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono strftime pattern for message times.
    pub time_format: String,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            color: true,
        }
    }
}

impl ChatConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ChatConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Loads the per-user config file if there is one, otherwise defaults.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config_dir>/rolechat/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    fn validate(&self) -> Result<()> {
        if self.display.time_format.trim().is_empty() {
            return Err(ChatError::config("display.time_format must not be empty"));
        }
        if format_time(&chrono::Utc::now(), &self.display.time_format).is_none() {
            return Err(ChatError::config(format!(
                "display.time_format is not a valid strftime pattern: '{}'",
                self.display.time_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ChatConfig::from_toml_str("").unwrap();
        assert_eq!(config, ChatConfig::default());
        assert!(config.transcript.seed);
        assert_eq!(config.display.time_format, "%H:%M");
    }

    #[test]
    fn test_partial_config() {
        let config = ChatConfig::from_toml_str(
            r#"
            [transcript]
            seed = false
            "#,
        )
        .unwrap();
        assert!(!config.transcript.seed);
        assert!(config.transcript.trim_content);
        assert!(config.display.color);
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let err = ChatConfig::from_toml_str("[transcript\nseed = ").unwrap_err();
        assert!(matches!(err, ChatError::Serialization { ref format, .. } if format == "TOML"));
    }

    #[test]
    fn test_blank_time_format_rejected() {
        let err = ChatConfig::from_toml_str("[display]\ntime_format = \" \"").unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn test_bad_strftime_rejected() {
        let err = ChatConfig::from_toml_str("[display]\ntime_format = \"%Q\"").unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn test_parse_only_specifier_rejected() {
        let err = ChatConfig::from_toml_str("[display]\ntime_format = \"%#z\"").unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ntime_format = \"%H:%M:%S\"\ncolor = false").unwrap();

        let config = ChatConfig::load(file.path()).unwrap();
        assert_eq!(config.display.time_format, "%H:%M:%S");
        assert!(!config.display.color);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChatConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ChatError::Io { .. }));
    }
}
