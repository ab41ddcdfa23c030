//! Environment variable handling for configuration overrides.
//!
//! `PATHEDIT_*` variables override values from configuration files.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::{OutputFormat, ShellType};

/// Handles environment variable overrides for configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PATHEDIT_*` overrides to `config`.
    ///
    /// - `PATHEDIT_SEPARATOR`: a single character
    /// - `PATHEDIT_FORMAT`: an output format name
    /// - `PATHEDIT_SHELL`: a shell name
    /// - `PATHEDIT_SYSTEM_PATHS`: comma-separated directories
    /// - `PATHEDIT_KEEP_INVALID`: a boolean
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var("PATHEDIT_SEPARATOR") {
            config.separator = Some(Self::parse_separator("PATHEDIT_SEPARATOR", &value)?);
        }

        if let Ok(value) = env::var("PATHEDIT_FORMAT") {
            config.format = Some(value.parse::<OutputFormat>()?);
        }

        if let Ok(value) = env::var("PATHEDIT_SHELL") {
            config.shell = Some(value.parse::<ShellType>()?);
        }

        if let Ok(value) = env::var("PATHEDIT_SYSTEM_PATHS") {
            config.system_paths = Some(Self::parse_list(&value));
        }

        if let Ok(value) = env::var("PATHEDIT_KEEP_INVALID") {
            config.keep_invalid = Some(Self::parse_bool("PATHEDIT_KEEP_INVALID", &value)?);
        }

        Ok(())
    }

    fn parse_separator(field: &str, s: &str) -> Result<char> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("separator must be exactly one character, got '{s}'"),
            }),
        }
    }

    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
