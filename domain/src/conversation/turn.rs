//! Turn value objects: what is sent, what comes back, and where the
//! controller is in its per-turn state machine.

use serde::Serialize;
use thiserror::Error;

/// Shown when the backend reports an application-level failure
pub const APPLICATION_ERROR_PREFIX: &str = "❌ Error: ";

/// Shown for transport failures, malformed replies and timeouts
pub const TRANSPORT_APOLOGY: &str =
    "❌ Sorry, I encountered an error. Please make sure the backend is running and try again.";

/// Shown when the user cancels a pending turn
pub const CANCELLED_NOTICE: &str = "❌ Request cancelled.";

/// Request sent to the prediction endpoint for one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRequest {
    pub message: String,
    pub session_id: Option<String>,
}

impl TurnRequest {
    pub fn new(message: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// Why a turn failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The backend answered with a non-success status and a message
    #[error("application error: {0}")]
    Application(String),

    /// Network error or an unparseable body
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("request cancelled")]
    Cancelled,
}

impl FailureReason {
    /// Text of the assistant message that records this failure in the transcript
    pub fn user_message(&self) -> String {
        match self {
            FailureReason::Application(message) => format!("{APPLICATION_ERROR_PREFIX}{message}"),
            FailureReason::Transport(_) | FailureReason::Timeout => TRANSPORT_APOLOGY.to_string(),
            FailureReason::Cancelled => CANCELLED_NOTICE.to_string(),
        }
    }
}

/// Result of one request/response cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Success {
        response_text: String,
        session_id: Option<String>,
    },
    Failure {
        reason: FailureReason,
    },
}

impl TurnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TurnOutcome::Success { .. })
    }

    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match self {
            TurnOutcome::Failure { reason } => Some(reason),
            TurnOutcome::Success { .. } => None,
        }
    }
}

/// Controller state between and during turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    Sending,
}

impl TurnState {
    pub fn is_sending(&self) -> bool {
        *self == TurnState::Sending
    }
}
