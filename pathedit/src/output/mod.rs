//! Output formatting for path lists.
//!
//! A path list can be rendered as a separator-joined value, one entry per
//! line, a JSON array, a YAML sequence, or a shell export statement. The
//! rendered text is either returned or written to a destination file.

mod formatters;
pub mod shell;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use formatters::{
    ExportFormatter, JoinedFormatter, JsonFormatter, ListFormatter, YamlFormatter,
};
pub use shell::ShellType;

/// Trait for rendering a path list into text.
pub trait PathFormatter {
    /// Format the given entries into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the entries cannot be encoded in this format.
    fn format(&self, paths: &[String]) -> Result<String>;
}

/// Available output formats.
///
/// ```
/// use pathedit::output::OutputFormat;
///
/// let format: OutputFormat = "JSON".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert!("toml".parse::<OutputFormat>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Separator-joined value, as stored in the environment.
    #[default]
    Path,
    /// One entry per line.
    List,
    /// JSON array of strings.
    Json,
    /// YAML sequence of strings.
    Yaml,
    /// Shell export statement.
    #[value(alias = "export")]
    #[serde(alias = "export")]
    Shell,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// `separator` joins entries for `path` and `shell`; `shell` picks the
    /// export dialect and is ignored by the other formats.
    #[must_use]
    pub fn create_formatter(&self, separator: char, shell: ShellType) -> Box<dyn PathFormatter> {
        match self {
            Self::Path => Box::new(JoinedFormatter::new(separator)),
            Self::List => Box::new(ListFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Shell => Box::new(ExportFormatter::new(shell, separator)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "path" => Ok(Self::Path),
            "list" => Ok(Self::List),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "shell" | "export" => Ok(Self::Shell),
            _ => Err(Error::InvalidFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::List => write!(f, "list"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Shell => write!(f, "shell"),
        }
    }
}

/// Write rendered output to `destination`, or hand it back when there is
/// no destination.
///
/// A trailing newline is added to file contents so the file ends cleanly.
///
/// # Errors
///
/// Returns an I/O error if the destination cannot be written.
pub fn emit(rendered: String, destination: Option<&Path>) -> Result<Option<String>> {
    match destination {
        None => Ok(Some(rendered)),
        Some(path) => {
            let mut contents = rendered;
            if !contents.ends_with('\n') {
                contents.push('\n');
            }
            fs::write(path, contents)?;
            log::debug!("wrote {}", path.display());
            Ok(None)
        }
    }
}
