//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the per-user data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".pathedit";

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user config and, if given, an explicit config file.
    ///
    /// The user config lives at `{data_dir}/config.yaml`, defaulting to
    /// `~/.pathedit/config.yaml`; a missing user config is not an error.
    /// An explicit file must exist. Sources are returned lowest precedence
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed, or
    /// if the explicit file is missing.
    pub fn load_all(explicit: Option<&Path>, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        let user_path = match data_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => default_data_dir()?.join(CONFIG_FILE_NAME),
        };
        if user_path.exists() {
            let config = Self::load_file(&user_path)?;
            sources.push(ConfigSource {
                path: user_path,
                precedence: 1,
                config,
            });
        }

        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config,
            });
        }

        Ok(sources)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("failed to read configuration file: {e}"),
        })?;

        let config = serde_yaml::from_str(&contents)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// The default data directory, `~/.pathedit`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~"),
            reason: "cannot determine home directory".to_string(),
        })
}
