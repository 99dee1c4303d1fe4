//! Term configuration loaded from a JSON document.
//!
//! The document must contain a `termos` array of strings. Any other fields
//! are ignored.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Extension given to the generated report.
pub const REPORT_EXTENSION: &str = "pdf";

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Search terms, in the order they appear in the file.
    #[serde(rename = "termos")]
    pub terms: Vec<String>,
}

impl ReportConfig {
    /// Create a configuration from a term list.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Load the configuration from a JSON file.
    ///
    /// Fails with [`Error::ConfigNotFound`] when `path` is not a regular file
    /// and with [`Error::Config`] when the JSON is malformed or lacks `termos`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loaded {} terms from {}", config.terms.len(), path.display());
        Ok(config)
    }

    /// Parse the configuration from a JSON string.
    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Path of the report written for a configuration file: same directory and
/// stem, with the report extension.
pub fn report_path_for(config_path: &Path) -> PathBuf {
    config_path.with_extension(REPORT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_terms() {
        let config = ReportConfig::from_json(r#"{"termos": ["cat", "dog"]}"#).unwrap();
        assert_eq!(config.terms, vec!["cat", "dog"]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let config =
            ReportConfig::from_json(r#"{"titulo": "x", "termos": ["a"], "n": 3}"#).unwrap();
        assert_eq!(config, ReportConfig::new(["a"]));
    }

    #[test]
    fn test_missing_terms_field() {
        let err = ReportConfig::from_json(r#"{"terms": ["a"]}"#).unwrap_err();
        assert!(err.to_string().contains("termos"));
    }

    #[test]
    fn test_report_path_replaces_extension() {
        assert_eq!(
            report_path_for(Path::new("/data/busca.json")),
            PathBuf::from("/data/busca.pdf")
        );
        assert_eq!(report_path_for(Path::new("terms")), PathBuf::from("terms.pdf"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReportConfig::load("/nonexistent/terms.json").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }
}
