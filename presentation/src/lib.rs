//! Presentation layer for churn-assistant
//!
//! This crate contains CLI definitions, the reply renderer, pending
//! indicators, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, EXAMPLE_PROMPT};
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::renderer::ReplyRenderer;
pub use progress::reporter::{SimpleProgress, TurnSpinner};
