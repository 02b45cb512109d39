//! Extension configuration.

/// Default underline tag.
pub const DEFAULT_TAG: &str = "u";

/// Configuration error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Tag name is empty.
    #[error("Configuration error: tag cannot be empty")]
    EmptyTag,
    /// Tag name is not a valid element name.
    #[error("Configuration error: invalid tag name {0:?}")]
    InvalidTag(String),
}

/// Settings shared by all underline rules.
///
/// Immutable once built; every rule receives the same values.
///
/// # Example
///
/// ```
/// use md_underline::UnderlineConfig;
///
/// let config = UnderlineConfig::new("span").unwrap().with_class("under");
/// assert_eq!(config.tag(), "span");
/// assert_eq!(config.cls(), "under");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct UnderlineConfig {
    tag: String,
    cls: String,
}

impl Default for UnderlineConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_owned(),
            cls: String::new(),
        }
    }
}

impl UnderlineConfig {
    /// Create a configuration with the given tag and no class.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `tag` is empty or not an element name
    /// (an ASCII letter followed by ASCII letters, digits or `-`).
    pub fn new(tag: impl Into<String>) -> Result<Self, ConfigError> {
        let tag = tag.into();
        validate_tag(&tag)?;
        Ok(Self {
            tag,
            cls: String::new(),
        })
    }

    /// Set the class added to every underline element.
    ///
    /// An empty string means no class.
    #[must_use]
    pub fn with_class(mut self, cls: impl Into<String>) -> Self {
        self.cls = cls.into();
        self
    }

    /// Underline element tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Class for underline elements (empty when unset).
    #[must_use]
    pub fn cls(&self) -> &str {
        &self.cls
    }
}

fn validate_tag(tag: &str) -> Result<(), ConfigError> {
    let mut chars = tag.chars();
    let Some(first) = chars.next() else {
        return Err(ConfigError::EmptyTag);
    };
    if !first.is_ascii_alphabetic() || !chars.all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ConfigError::InvalidTag(tag.to_owned()));
    }
    Ok(())
}

/// Configuration as written in a settings file.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    tag: String,
    cls: String,
}

#[cfg(feature = "serde")]
impl Default for RawConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_owned(),
            cls: String::new(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for UnderlineConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.tag)?.with_class(raw.cls))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UnderlineConfig::default();
        assert_eq!(config.tag(), "u");
        assert_eq!(config.cls(), "");
    }

    #[test]
    fn test_custom_tag_and_class() {
        let config = UnderlineConfig::new("b").unwrap().with_class("underline");
        assert_eq!(config.tag(), "b");
        assert_eq!(config.cls(), "underline");
    }

    #[test]
    fn test_empty_tag_rejected() {
        assert_eq!(UnderlineConfig::new(""), Err(ConfigError::EmptyTag));
    }

    #[test]
    fn test_invalid_tags_rejected() {
        for tag in ["1u", "u u", "<u>", "-u", "ü"] {
            let result = UnderlineConfig::new(tag);
            assert_eq!(
                result,
                Err(ConfigError::InvalidTag(tag.to_owned())),
                "tag {tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_tags_accepted() {
        for tag in ["u", "span", "h1", "my-underline"] {
            assert!(UnderlineConfig::new(tag).is_ok(), "tag {tag:?} should be accepted");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::EmptyTag.to_string(),
            "Configuration error: tag cannot be empty"
        );
        assert!(
            ConfigError::InvalidTag("1u".to_owned())
                .to_string()
                .contains("\"1u\"")
        );
    }

    #[cfg(feature = "serde")]
    mod serde_config {
        use super::*;

        #[test]
        fn test_deserialize_defaults() {
            let config: UnderlineConfig = toml::from_str("").unwrap();
            assert_eq!(config, UnderlineConfig::default());
        }

        #[test]
        fn test_deserialize_values() {
            let toml = r#"
tag = "span"
cls = "under"
"#;
            let config: UnderlineConfig = toml::from_str(toml).unwrap();
            assert_eq!(config.tag(), "span");
            assert_eq!(config.cls(), "under");
        }

        #[test]
        fn test_deserialize_rejects_empty_tag() {
            let result: Result<UnderlineConfig, _> = toml::from_str(r#"tag = """#);
            let err = result.unwrap_err();
            assert!(
                err.to_string().contains("tag cannot be empty"),
                "unexpected error: {err}"
            );
        }

        #[test]
        fn test_deserialize_rejects_unknown_field() {
            let result: Result<UnderlineConfig, _> = toml::from_str(r#"color = "red""#);
            assert!(result.is_err());
        }
    }
}
