//! Error types for Strata
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Strata operations
pub type StrataResult<T> = Result<T, StrataError>;

/// Main error type for Strata operations
#[derive(Error, Debug)]
pub enum StrataError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Tree file extension is not one we know how to parse
    #[error("unsupported tree format for {file} (expected .json, .yaml or .yml)")]
    UnsupportedTreeFormat { file: PathBuf },

    /// An option is missing its id
    #[error("option '{title}' under '{parent}' has an empty id")]
    EmptyOptionId { title: String, parent: String },

    /// Two siblings share an id
    #[error("duplicate option id '{id}' under '{parent}'")]
    DuplicateOptionId { id: String, parent: String },

    /// A level key string could not be parsed
    #[error("invalid level key '{0}' (expected 'level<N>' or 'level<N>_<M>')")]
    InvalidLevelKey(String),

    /// Level outside `1..=levels`
    #[error("level {level} is out of range (1..={levels})")]
    LevelOutOfRange { level: usize, levels: usize },

    /// The option is not part of the data visible at that level
    #[error("option '{id}' is not available at {key}")]
    UnknownOption { id: String, key: String },

    /// A `--select` path contained an empty segment
    #[error("empty segment in selection path '{0}'")]
    EmptyPathSegment(String),

    /// Line prompt failure
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Interactive selection was cancelled by the user
    #[error("selection cancelled by user")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_level_out_of_range() {
        let err = StrataError::LevelOutOfRange {
            level: 4,
            levels: 3,
        };
        assert_eq!(err.to_string(), "level 4 is out of range (1..=3)");
    }

    #[test]
    fn test_error_display_unknown_option() {
        let err = StrataError::UnknownOption {
            id: "zz".to_string(),
            key: "level2".to_string(),
        };
        assert_eq!(err.to_string(), "option 'zz' is not available at level2");
    }

    #[test]
    fn test_error_display_unsupported_format() {
        let err = StrataError::UnsupportedTreeFormat {
            file: PathBuf::from("tree.csv"),
        };
        assert_eq!(
            err.to_string(),
            "unsupported tree format for tree.csv (expected .json, .yaml or .yml)"
        );
    }
}
