//! Wire format of the prediction backend's `/chat` endpoint.
//!
//! - **Request**: `{"message": "...", "session_id": "..." | null}`
//! - **Success**: `{"status": "success", "response": "...", "session_id": "..."}`
//! - **Failure**: `{"status": "<anything else>", "message": "..."}`

use crate::http::error::{HttpGatewayError, Result};
use churn_application::GatewayReply;
use churn_domain::TurnRequest;
use serde::{Deserialize, Serialize};

/// Status value that marks a successful reply
pub const STATUS_SUCCESS: &str = "success";

/// Used when a failed reply carries no message
const UNKNOWN_ERROR: &str = "unknown error";

/// Request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub session_id: Option<&'a str>,
}

impl<'a> From<&'a TurnRequest> for ChatRequest<'a> {
    fn from(request: &'a TurnRequest) -> Self {
        Self {
            message: &request.message,
            session_id: request.session_id.as_deref(),
        }
    }
}

/// Response body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    pub status: String,
    pub response: Option<String>,
    pub session_id: Option<String>,
    pub message: Option<String>,
}

impl ChatResponse {
    /// Parse a raw response body
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| HttpGatewayError::ParseError {
            error: e.to_string(),
            raw: raw.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Interpret the body as a reply or a backend-reported error
    pub fn into_reply(self) -> Result<GatewayReply> {
        if !self.is_success() {
            return Err(HttpGatewayError::Backend(
                self.message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            ));
        }

        let response = self.response.ok_or(HttpGatewayError::MissingResponse)?;
        Ok(GatewayReply {
            response,
            session_id: self.session_id.filter(|id| !id.is_empty()),
        })
    }
}
