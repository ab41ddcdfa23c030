//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathedit::config::{Config, ConfigMerger};
///
/// let low = Config { separator: Some(':'), ..Default::default() };
/// let high = Config { separator: Some(';'), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.separator, Some(';'));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced wholesale when set in `source`. The
    /// `system_paths` list is ordered, so it is never accumulated.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.separator.is_some() {
            target.separator = source.separator;
        }

        if source.format.is_some() {
            target.format = source.format;
        }

        if source.shell.is_some() {
            target.shell = source.shell;
        }

        if source.system_paths.is_some() {
            target.system_paths.clone_from(&source.system_paths);
        }

        if source.keep_invalid.is_some() {
            target.keep_invalid = source.keep_invalid;
        }
    }
}
