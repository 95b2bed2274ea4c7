//! Infrastructure layer for churn-assistant
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP gateway to the prediction backend, the JSONL
//! conversation logger, and configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_ENDPOINT, FileBackendConfig, FileConfig,
    FileConversationConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use http::{
    error::{HttpGatewayError, Result},
    gateway::HttpChurnGateway,
};
pub use logging::JsonlConversationLogger;
