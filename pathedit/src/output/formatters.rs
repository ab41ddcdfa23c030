//! Output formatter implementations.

use crate::{Error, Result};

use super::{PathFormatter, ShellType};

/// Drop empty entries. Everything else is rendered verbatim so that output
/// agrees with the comparisons the editor makes.
fn visible_entries(paths: &[String]) -> Vec<String> {
    paths.iter().filter(|p| !p.is_empty()).cloned().collect()
}

/// Formatter for a separator-joined PATH value.
pub struct JoinedFormatter {
    separator: char,
}

impl JoinedFormatter {
    /// Create a formatter joining entries with `separator`.
    #[must_use]
    pub fn new(separator: char) -> Self {
        Self { separator }
    }
}

impl PathFormatter for JoinedFormatter {
    fn format(&self, paths: &[String]) -> Result<String> {
        Ok(visible_entries(paths).join(self.separator.encode_utf8(&mut [0; 4])))
    }
}

/// Formatter printing one entry per line.
pub struct ListFormatter;

impl PathFormatter for ListFormatter {
    fn format(&self, paths: &[String]) -> Result<String> {
        Ok(visible_entries(paths).join("\n"))
    }
}

/// Formatter for a pretty-printed JSON array.
pub struct JsonFormatter;

impl PathFormatter for JsonFormatter {
    fn format(&self, paths: &[String]) -> Result<String> {
        serde_json::to_string_pretty(&visible_entries(paths)).map_err(Error::from)
    }
}

/// Formatter for a YAML block sequence.
pub struct YamlFormatter;

impl PathFormatter for YamlFormatter {
    fn format(&self, paths: &[String]) -> Result<String> {
        let rendered = serde_yaml::to_string(&visible_entries(paths))?;
        Ok(rendered.trim_end().to_string())
    }
}

/// Formatter for a shell statement exporting the list.
pub struct ExportFormatter {
    shell: ShellType,
    separator: char,
    variable: String,
}

impl ExportFormatter {
    /// Create an export formatter for the `PATH` variable.
    #[must_use]
    pub fn new(shell: ShellType, separator: char) -> Self {
        Self::for_variable(shell, separator, "PATH")
    }

    /// Create an export formatter for an arbitrary list variable such as
    /// `MANPATH` or `LD_LIBRARY_PATH`.
    #[must_use]
    pub fn for_variable(shell: ShellType, separator: char, variable: &str) -> Self {
        Self {
            shell,
            separator,
            variable: variable.to_string(),
        }
    }
}

impl PathFormatter for ExportFormatter {
    fn format(&self, paths: &[String]) -> Result<String> {
        if !is_valid_env_var_name(&self.variable) {
            return Err(Error::Validation {
                field: "variable".to_string(),
                message: format!(
                    "invalid environment variable name '{}': must contain only alphanumeric characters and underscores, and start with a letter or underscore",
                    self.variable
                ),
            });
        }
        Ok(self
            .shell
            .format_export(&self.variable, &visible_entries(paths), self.separator))
    }
}

/// Valid names start with a letter or underscore and contain only ASCII
/// letters, digits and underscores.
fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
