//! Shell detection and export statement formatting.

use std::env;
use std::str::FromStr;

use crate::{Error, Result};

/// Supported shell dialects for export statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ShellType {
    /// Bourne Again Shell (bash), also used for plain `sh`.
    #[default]
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    #[value(alias = "pwsh")]
    #[serde(alias = "pwsh")]
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - zsh
    /// 2. `FISH_VERSION` - fish
    /// 3. `PSModulePath` - `PowerShell`
    /// 4. `SHELL` (a path like `/bin/zsh`)
    /// 5. bash
    #[must_use]
    pub fn detect() -> Self {
        if env::var("ZSH_VERSION").is_ok() {
            return Self::Zsh;
        }
        if env::var("FISH_VERSION").is_ok() {
            return Self::Fish;
        }
        if env::var("PSModulePath").is_ok() {
            return Self::PowerShell;
        }

        match env::var("SHELL") {
            Ok(shell) if shell.contains("zsh") => Self::Zsh,
            Ok(shell) if shell.contains("fish") => Self::Fish,
            Ok(shell) if shell.contains("pwsh") || shell.contains("powershell") => {
                Self::PowerShell
            }
            _ => Self::Bash,
        }
    }

    /// Format a statement exporting `entries` as the list variable `var`.
    ///
    /// POSIX shells receive one joined, quoted value. Fish receives the
    /// entries as separate list elements, since fish stores `PATH` as a list.
    ///
    /// ```
    /// use pathedit::output::ShellType;
    ///
    /// let entries = vec!["/usr/bin".to_string(), "/my tools".to_string()];
    /// assert_eq!(
    ///     ShellType::Bash.format_export("PATH", &entries, ':'),
    ///     "export PATH='/usr/bin:/my tools'"
    /// );
    /// assert_eq!(
    ///     ShellType::Fish.format_export("PATH", &entries, ':'),
    ///     "set -gx PATH /usr/bin '/my tools'"
    /// );
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, entries: &[String], separator: char) -> String {
        match self {
            Self::Bash | Self::Zsh => {
                let joined = join(entries, separator);
                format!("export {var}={}", posix_quote(&joined))
            }
            Self::Fish => {
                let mut statement = format!("set -gx {var}");
                for entry in entries {
                    statement.push(' ');
                    statement.push_str(&fish_quote(entry));
                }
                statement
            }
            Self::PowerShell => {
                let joined = join(entries, separator);
                format!("$env:{var}=\"{}\"", powershell_escape(&joined))
            }
        }
    }
}

impl FromStr for ShellType {
    type Err = Error;

    /// Parse a shell name case-insensitively. `sh` maps to bash, and `pwsh`
    /// or `ps` map to `PowerShell`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }
}

fn join(entries: &[String], separator: char) -> String {
    entries.join(separator.encode_utf8(&mut [0; 4]))
}

/// Characters that never need quoting in a POSIX shell word.
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c)
}

/// Quote a value for POSIX shells, leaving shell-safe words bare.
///
/// Single quotes inside the value are closed, escaped and reopened.
///
/// ```
/// use pathedit::output::shell::posix_quote;
///
/// assert_eq!(posix_quote("/usr/bin:/bin"), "/usr/bin:/bin");
/// assert_eq!(posix_quote("/it's"), "'/it'\"'\"'s'");
/// assert_eq!(posix_quote(""), "''");
/// ```
#[must_use]
pub fn posix_quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }
    if value.chars().all(is_shell_safe) {
        return value.to_string();
    }
    format!("'{}'", value.replace('\'', "'\"'\"'"))
}

fn fish_quote(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_shell_safe) {
        return value.to_string();
    }
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn powershell_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '`' | '"' | '$') {
            escaped.push('`');
        }
        escaped.push(c);
    }
    escaped
}
