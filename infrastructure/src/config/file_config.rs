//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use churn_application::{ConversationConfig, DEFAULT_GREETING, DEFAULT_REQUEST_TIMEOUT};
use churn_domain::OutputFormat;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Hosted prediction backend
pub const DEFAULT_ENDPOINT: &str = "https://ea-task.onrender.com/chat";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("backend.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("backend.endpoint must be an http(s) URL, got '{0}'")]
    InvalidEndpoint(String),
}

/// Raw backend configuration from TOML (`[backend]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Chat endpoint URL
    pub endpoint: String,
    /// Timeout in seconds for one request
    pub timeout_seconds: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

/// Raw conversation configuration from TOML (`[conversation]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversationConfig {
    /// Assistant message that opens the transcript
    pub greeting: String,
    /// Whether to open with the greeting at all
    pub show_greeting: bool,
}

impl Default for FileConversationConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            show_greeting: true,
        }
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML (`[repl]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the pending indicator while waiting for a reply
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Raw logging configuration from TOML (`[logging]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file that receives one line per conversation event
    pub conversation_log: Option<PathBuf>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: FileBackendConfig,
    pub conversation: FileConversationConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        let endpoint = self.backend.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        match Url::parse(endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err(ConfigValidationError::InvalidEndpoint(endpoint.to_string())),
        }
    }

    /// Application-level settings for the conversation controller
    pub fn conversation_config(&self) -> ConversationConfig {
        ConversationConfig::with_timeout_seconds(self.backend.timeout_seconds)
    }

    /// Greeting to seed the transcript with, if enabled
    pub fn greeting(&self) -> Option<&str> {
        let greeting = self.conversation.greeting.trim();
        (self.conversation.show_greeting && !greeting.is_empty()).then_some(greeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
endpoint = "http://localhost:8000/chat"
timeout_seconds = 15

[conversation]
greeting = "Hi there"
show_greeting = false

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/churn/history.txt"

[logging]
conversation_log = "/tmp/churn.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.endpoint, "http://localhost:8000/chat");
        assert_eq!(config.backend.timeout_seconds, 15);
        assert_eq!(config.conversation.greeting, "Hi there");
        assert!(!config.conversation.show_greeting);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.conversation_log,
            Some(PathBuf::from("/tmp/churn.jsonl"))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[backend]
timeout_seconds = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.timeout_seconds, 5);
        // Defaults should apply
        assert_eq!(config.backend.endpoint, DEFAULT_ENDPOINT);
        assert!(config.conversation.show_greeting);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.logging.conversation_log.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.backend.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.backend.timeout_seconds, 60);
        assert_eq!(config.output.format, OutputFormat::Pretty);
        assert_eq!(config.greeting(), Some(DEFAULT_GREETING));
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[backend]\ntimeout_seconds = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let config: FileConfig = toml::from_str("[backend]\nendpoint = \"  \"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyEndpoint)
        ));
    }

    #[test]
    fn test_validate_non_http_endpoint() {
        let config: FileConfig = toml::from_str("[backend]\nendpoint = \"ftp://host/chat\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_conversation_config_uses_timeout() {
        let config: FileConfig = toml::from_str("[backend]\ntimeout_seconds = 7\n").unwrap();
        assert_eq!(
            config.conversation_config().request_timeout,
            Duration::from_secs(7)
        );
    }

    #[test]
    fn test_greeting_disabled() {
        let config: FileConfig =
            toml::from_str("[conversation]\nshow_greeting = false\n").unwrap();
        assert_eq!(config.greeting(), None);
    }
}
