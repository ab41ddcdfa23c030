//! Error types for the pathedit library.
//!
//! This module provides the error hierarchy for all editor, formatting and
//! configuration operations, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathedit error.
///
/// # Examples
///
/// ```
/// use pathedit::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathedit library.
///
/// No operation that returns one of these errors leaves a partial change
/// behind: editor snapshots are only committed after a transformation
/// succeeds.
#[derive(Debug, Error)]
pub enum Error {
    /// Dynamic input was neither a joined string nor a sequence of strings.
    #[error("invalid path input: expected a string or a list of strings, found {found}")]
    InvalidInputKind {
        /// Description of the value that was supplied.
        found: String,
    },

    /// An argument had a value outside its accepted set.
    #[error("invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was rejected.
        field: String,
        /// Why it was rejected.
        message: String,
    },

    /// A step count or index exceeded the available range.
    #[error("out of range: requested {requested}, but only {available} available")]
    OutOfRange {
        /// The requested count or index.
        requested: usize,
        /// The largest value that would have been accepted.
        available: usize,
    },

    /// An output format tag was not recognized.
    #[error("invalid format '{format}': must be one of path, list, json, yaml, shell")]
    InvalidFormat {
        /// The unrecognized format tag.
        format: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error was caused by a caller-supplied value rather than
    /// the environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathedit::Error;
    ///
    /// let err = Error::OutOfRange { requested: 4, available: 1 };
    /// assert!(err.is_usage_error());
    ///
    /// let err = Error::Io(std::io::Error::other("disk full"));
    /// assert!(!err.is_usage_error());
    /// ```
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInputKind { .. }
                | Self::InvalidArgument { .. }
                | Self::OutOfRange { .. }
                | Self::InvalidFormat { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_kind_error() {
        let err = Error::InvalidInputKind {
            found: "number".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path input"));
        assert!(display.contains("number"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::InvalidArgument {
            field: "mode".to_string(),
            message: "use 'prepend' or 'append'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid argument 'mode'"));
        assert!(display.contains("prepend"));
    }

    #[test]
    fn test_out_of_range_error() {
        let err = Error::OutOfRange {
            requested: 5,
            available: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("requested 5"));
        assert!(display.contains("only 2"));
    }

    #[test]
    fn test_invalid_format_error() {
        let err = Error::InvalidFormat {
            format: "toml".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid format 'toml'"));
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "separator".to_string(),
            message: "must be a single character".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("separator"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_usage_errors() {
        assert!(Error::InvalidFormat {
            format: "x".into()
        }
        .is_usage_error());
        assert!(!Error::Validation {
            field: "x".into(),
            message: "y".into()
        }
        .is_usage_error());
    }
}
