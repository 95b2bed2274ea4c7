//! Configuration file loading for churn-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CHURN_*` environment variables (`CHURN_BACKEND__ENDPOINT=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./churn.toml` or `./.churn.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/churn-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_ENDPOINT, FileBackendConfig, FileConfig,
    FileConversationConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
