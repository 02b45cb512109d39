//! Configuration file for the CLI.
//!
//! Parses an optional TOML file with an `[underline]` table:
//!
//! ```toml
//! [underline]
//! tag = "span"
//! cls = "underline"
//! ```
//!
//! Command-line flags are applied on top via [`CliSettings`].

use std::path::{Path, PathBuf};

use md_underline::UnderlineConfig;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub(crate) struct CliSettings {
    /// Override underline tag.
    pub tag: Option<String>,
    /// Override underline class.
    pub cls: Option<String>,
}

impl CliSettings {
    /// Whether no override is set.
    pub(crate) fn is_empty(&self) -> bool {
        self.tag.is_none() && self.cls.is_none()
    }
}

/// CLI configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Underline extension settings.
    pub underline: UnderlineConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Invalid extension settings.
    #[error(transparent)]
    Underline(#[from] md_underline::ConfigError),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// Without `config_path` the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns error if `config_path` doesn't exist, parsing fails, or the
    /// resulting settings are invalid.
    pub(crate) fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings)?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) -> Result<(), ConfigError> {
        if settings.is_empty() {
            return Ok(());
        }
        let tag = settings
            .tag
            .as_deref()
            .unwrap_or_else(|| self.underline.tag());
        let cls = settings
            .cls
            .as_deref()
            .unwrap_or_else(|| self.underline.cls());
        self.underline = UnderlineConfig::new(tag)?.with_class(cls);
        Ok(())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = Config::load(None, None).unwrap();
        assert_eq!(config.underline, UnderlineConfig::default());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.underline.tag(), "u");
        assert_eq!(config.underline.cls(), "");
    }

    #[test]
    fn test_parse_underline_config() {
        let toml = r#"
[underline]
tag = "span"
cls = "under"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.underline.tag(), "span");
        assert_eq!(config.underline.cls(), "under");
    }

    #[test]
    fn test_parse_rejects_unknown_section() {
        let result: Result<Config, _> = toml::from_str("[server]\nport = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("md-underline.toml");
        fs::write(&path, "[underline]\ntag = \"ins\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.underline.tag(), "ins");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(
            matches!(err, ConfigError::NotFound(_)),
            "Expected ConfigError::NotFound, got {err:?}"
        );
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_invalid_tag_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("md-underline.toml");
        fs::write(&path, "[underline]\ntag = \"\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(
            matches!(err, ConfigError::Parse(_)),
            "Expected ConfigError::Parse, got {err:?}"
        );
        assert!(err.to_string().contains("tag cannot be empty"));
    }

    #[test]
    fn test_apply_cli_settings_tag() {
        let mut config: Config = toml::from_str("[underline]\ncls = \"under\"\n").unwrap();
        let overrides = CliSettings {
            tag: Some("b".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides).unwrap();

        assert_eq!(config.underline.tag(), "b");
        assert_eq!(config.underline.cls(), "under"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_cls() {
        let mut config = Config::default();
        let overrides = CliSettings {
            cls: Some("fancy".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides).unwrap();

        assert_eq!(config.underline.tag(), "u"); // Unchanged
        assert_eq!(config.underline.cls(), "fancy");
    }

    #[test]
    fn test_apply_cli_settings_invalid_tag() {
        let mut config = Config::default();
        let overrides = CliSettings {
            tag: Some(String::new()),
            ..Default::default()
        };

        let err = config.apply_cli_settings(&overrides).unwrap_err();

        assert!(
            matches!(
                err,
                ConfigError::Underline(md_underline::ConfigError::EmptyTag)
            ),
            "Expected EmptyTag, got {err:?}"
        );
        assert_eq!(config.underline, UnderlineConfig::default());
    }
}
