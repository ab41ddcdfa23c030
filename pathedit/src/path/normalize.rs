//! Normalization of individual PATH entries.
//!
//! A normalized entry is absolute, has `~` expanded to the home directory
//! and contains no `.` or `..` components. Symlinks are not followed: an
//! entry that points through a link keeps the spelling the user chose.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` or `~/` to the home directory.
///
/// `~user` syntax is rejected rather than passed through.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path is not valid UTF-8, the home
/// directory cannot be determined, or `~user` syntax is used.
///
/// ```
/// use pathedit::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/.cargo/bin")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with(".cargo/bin"));
///
/// assert_eq!(expand_tilde(Path::new("/usr/bin")).unwrap(), Path::new("/usr/bin"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(text) = path.to_str() else {
        return Err(invalid(path, "path contains invalid UTF-8"));
    };

    let rest = match text.strip_prefix('~') {
        None => return Ok(path.to_path_buf()),
        Some(rest) => rest,
    };

    let home = home::home_dir().ok_or_else(|| invalid(path, "cannot determine home directory"))?;

    if rest.is_empty() {
        Ok(home)
    } else if let Some(sub) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        Ok(home.join(sub))
    } else {
        Err(invalid(path, "~user syntax is not supported; use ~ or ~/path"))
    }
}

/// Resolve `.` and `..` components of a path lexically.
///
/// `..` at the root stays at the root, so `/../bin` resolves to `/bin`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] when `..` climbs above the start of a
/// relative path.
///
/// ```
/// use pathedit::path::normalize::resolve_components;
/// use std::path::PathBuf;
///
/// let resolved = resolve_components("/opt/./tool/../bin".as_ref()).unwrap();
/// assert_eq!(resolved, PathBuf::from("/opt/bin"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Normal(part) => result.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() && !has_root {
                    return Err(invalid(path, "too many '..' components"));
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Normalize a path: expand `~`, make it absolute against the current
/// directory, then resolve `.` and `..`.
///
/// # Errors
///
/// Propagates the errors of [`expand_tilde`] and [`resolve_components`],
/// and fails if the current directory is needed but unavailable.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir()
            .map_err(|e| invalid(path, &format!("cannot get current directory: {e}")))?;
        cwd.join(expanded)
    };

    resolve_components(&absolute)
}

/// Normalize a single PATH entry given as text.
///
/// # Errors
///
/// Fails like [`normalize`], and also when the result is not valid UTF-8.
///
/// ```
/// use pathedit::path::normalize::normalize_entry;
///
/// assert_eq!(normalize_entry("/usr/local/../bin").unwrap(), "/usr/bin");
/// ```
pub fn normalize_entry(entry: &str) -> Result<String> {
    let normalized = normalize(Path::new(entry))?;
    normalized
        .into_os_string()
        .into_string()
        .map_err(|os| invalid(Path::new(&os), "normalized path is not valid UTF-8"))
}

fn invalid(path: &Path, reason: &str) -> Error {
    Error::InvalidPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
