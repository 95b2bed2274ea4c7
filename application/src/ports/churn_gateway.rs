//! Churn Gateway port
//!
//! Defines the interface for talking to the remote churn prediction backend.

use async_trait::async_trait;
use churn_domain::{FailureReason, TurnRequest};
use thiserror::Error;

/// Errors that can occur during a backend round trip
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend answered, but with a non-success status
    #[error("Backend error: {0}")]
    Application(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl From<GatewayError> for FailureReason {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Application(message) => FailureReason::Application(message),
            GatewayError::Timeout => FailureReason::Timeout,
            other @ (GatewayError::Connection(_) | GatewayError::InvalidResponse(_)) => {
                FailureReason::Transport(other.to_string())
            }
        }
    }
}

/// A successful backend reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    pub response: String,
    pub session_id: Option<String>,
}

impl GatewayReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            session_id: None,
        }
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Gateway to the prediction backend
///
/// The backend is an opaque request/response endpoint. Implementations
/// (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChurnGateway: Send + Sync {
    /// Send one turn and wait for the reply
    async fn send_turn(&self, request: &TurnRequest) -> Result<GatewayReply, GatewayError>;
}
