//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::editor::{DEFAULT_SEPARATOR, SYSTEM_PATHS};
use crate::output::{OutputFormat, ShellType};

/// Complete configuration structure.
///
/// Every field is optional so that layers can be merged; the accessor
/// methods fall back to the built-in defaults.
///
/// ```
/// use pathedit::config::Config;
/// use pathedit::output::OutputFormat;
///
/// let config: Config = serde_yaml::from_str("format: json\nseparator: ';'").unwrap();
/// assert_eq!(config.format(), OutputFormat::Json);
/// assert_eq!(config.separator(), ';');
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Separator between PATH entries.
    pub separator: Option<char>,

    /// Default output format.
    pub format: Option<OutputFormat>,

    /// Shell dialect for `shell` output.
    pub shell: Option<ShellType>,

    /// Replacement for the canonical system directories, in order.
    pub system_paths: Option<Vec<String>>,

    /// Keep entries that are not existing directories when cleaning.
    pub keep_invalid: Option<bool>,
}

impl Config {
    /// The configured separator, or the platform separator.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator.unwrap_or(DEFAULT_SEPARATOR)
    }

    /// The configured output format, or `path`.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// The configured shell, or the one detected from the environment.
    #[must_use]
    pub fn shell(&self) -> ShellType {
        self.shell.unwrap_or_else(ShellType::detect)
    }

    /// The configured system directories, or the canonical set.
    #[must_use]
    pub fn system_paths(&self) -> Vec<String> {
        self.system_paths.clone().unwrap_or_else(|| {
            SYSTEM_PATHS.iter().map(ToString::to_string).collect()
        })
    }

    /// Whether cleaning keeps entries that are not directories.
    #[must_use]
    pub fn keep_invalid(&self) -> bool {
        self.keep_invalid.unwrap_or(false)
    }
}
