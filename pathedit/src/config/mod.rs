//! Layered configuration for pathedit.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from the following sources (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHEDIT_*`)
//! 3. An explicit configuration file (`--config`)
//! 4. User config (`~/.pathedit/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use pathedit::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         separator: Some(';'),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.separator(), ';');
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource, CONFIG_FILE_NAME, DATA_DIR_NAME};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
