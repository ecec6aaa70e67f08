//! TOML settings for the whole pipeline.

use crate::error::{ConfigError, Result};
use crate::parser::ParseConfig;
use crate::render::HtmlConfig;
use serde::Deserialize;
use std::path::Path;

/// Parse and HTML settings, each section optional.
///
/// ```toml
/// [parse]
/// prose_fallback = true
/// tidy_markup_breaks = true
///
/// [html]
/// math_backend = "mathml"
/// class_prefix = "exam"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub parse: ParseConfig,
    pub html: HtmlConfig,
}

impl Config {
    /// Parse settings from a TOML string.
    ///
    /// Malformed TOML is a [`ConfigError::Toml`]; well-formed TOML with an
    /// unknown key or value is a [`ConfigError::Invalid`].
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(input).map_err(|e| ConfigError::Toml(e.to_string()))?;

        toml::Value::Table(table)
            .try_into()
            .map_err(|e| ConfigError::Invalid(e.to_string()).into())
    }

    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::render::MathBackend;

    #[test]
    fn test_empty_config() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            r#"
[parse]
prose_fallback = false

[html]
math_backend = "MathML"
standalone = true
class_prefix = "exam"
title = "Đề kiểm tra"
"#,
        )
        .unwrap();

        assert!(!config.parse.prose_fallback);
        assert!(config.parse.tidy_markup_breaks);
        assert_eq!(config.html.math_backend, MathBackend::MathML);
        assert!(config.html.standalone);
        assert_eq!(config.html.class_prefix, "exam");
        assert_eq!(config.html.title.as_deref(), Some("Đề kiểm tra"));
    }

    #[test]
    fn test_unknown_backend() {
        let err = Config::from_toml_str("[html]\nmath_backend = \"asciimath\"").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
        assert!(err.to_string().contains("asciimath"));
    }

    #[test]
    fn test_unknown_field() {
        let err = Config::from_toml_str("[parse]\nstrict = true").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let err = Config::from_toml_str("[html\nstandalone = ").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Toml(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/mathmix.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
