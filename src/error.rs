//! Error types for the report pipeline.
//!
//! Every stage propagates its failure to the caller; nothing is recovered
//! internally, so a run either writes a complete report or none at all.

use std::path::PathBuf;

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration path does not exist or is not a regular file
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Target path does not exist or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Configuration could not be parsed (bad JSON or missing `termos`)
    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        /// Configuration file that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A search term is the empty string
    #[error("Search term at position {index} is empty")]
    EmptyTerm {
        /// Position of the offending term in the term list
        index: usize,
    },

    /// Text extraction failed for a document
    #[error("Failed to extract text from {}: {reason}", path.display())]
    Extraction {
        /// Document that failed
        path: PathBuf,
        /// Reason reported by the PDF backend
        reason: String,
    },

    /// Directory traversal error
    #[error("Directory scan error: {0}")]
    Scan(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report layout or serialization error
    #[error("Render error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_error() {
        let err = Error::ConfigNotFound(PathBuf::from("termos.json"));
        let msg = format!("{}", err);
        assert!(msg.contains("not found"));
        assert!(msg.contains("termos.json"));
    }

    #[test]
    fn test_not_a_directory_error() {
        let err = Error::NotADirectory(PathBuf::from("/tmp/file.txt"));
        assert!(format!("{}", err).contains("/tmp/file.txt"));
    }

    #[test]
    fn test_empty_term_error() {
        let err = Error::EmptyTerm { index: 3 };
        assert!(format!("{}", err).contains("position 3"));
    }

    #[test]
    fn test_config_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Config {
            path: PathBuf::from("bad.json"),
            source,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("bad.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_extraction_error() {
        let err = Error::Extraction {
            path: PathBuf::from("docs/broken.pdf"),
            reason: "invalid file header".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("docs/broken.pdf"));
        assert!(msg.contains("invalid file header"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
