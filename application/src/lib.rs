//! Application layer for churn-assistant
//!
//! This crate contains the conversation controller, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConversationConfig, DEFAULT_GREETING, DEFAULT_REQUEST_TIMEOUT};
pub use ports::{
    churn_gateway::{ChurnGateway, GatewayError, GatewayReply},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{NoTurnProgress, TurnProgressNotifier},
};
pub use use_cases::conversation_controller::{ConversationController, RejectReason, SubmitResult};
