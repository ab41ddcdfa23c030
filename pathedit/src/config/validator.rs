//! Configuration validation.

use std::collections::HashSet;
use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use pathedit::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { separator: Some('/'), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(separator) = config.separator {
            Self::validate_separator(separator)?;
        }

        if let Some(ref system_paths) = config.system_paths {
            Self::validate_system_paths(system_paths, config.separator())?;
        }

        Ok(())
    }

    /// A separator must be visible and must not be part of a directory path.
    fn validate_separator(separator: char) -> Result<()> {
        if separator.is_whitespace() || separator.is_control() {
            return Err(Error::Validation {
                field: "separator".into(),
                message: "Cannot be whitespace or a control character".into(),
            });
        }

        if separator == '/' || separator == '\\' || separator == '~' || separator == '.' {
            return Err(Error::Validation {
                field: "separator".into(),
                message: format!("'{separator}' is used inside directory paths"),
            });
        }

        Ok(())
    }

    /// System paths must be non-empty, absolute, unique and free of the
    /// separator.
    fn validate_system_paths(paths: &[String], separator: char) -> Result<()> {
        if paths.is_empty() {
            return Err(Error::Validation {
                field: "system_paths".into(),
                message: "Must list at least one directory".into(),
            });
        }

        let mut seen = HashSet::new();
        for path in paths {
            if path.trim().is_empty() {
                return Err(Error::Validation {
                    field: "system_paths".into(),
                    message: "Cannot contain empty entries".into(),
                });
            }

            if !Path::new(path).is_absolute() {
                return Err(Error::Validation {
                    field: "system_paths".into(),
                    message: format!("'{path}' is not an absolute path"),
                });
            }

            if path.contains(separator) {
                return Err(Error::Validation {
                    field: "system_paths".into(),
                    message: format!("'{path}' contains the separator '{separator}'"),
                });
            }

            if !seen.insert(path.as_str()) {
                return Err(Error::Validation {
                    field: "system_paths".into(),
                    message: format!("Duplicate entry: {path}"),
                });
            }
        }

        Ok(())
    }
}
