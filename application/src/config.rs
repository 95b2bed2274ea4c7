//! Application-level configuration.
//!
//! This module provides configuration types that control how the conversation
//! controller behaves, such as the per-request timeout.

use std::time::Duration;

/// Default upper bound for one backend round trip.
///
/// The hosted backend can take a while to wake up, so this is generous.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Opening assistant message shown before the first turn
pub const DEFAULT_GREETING: &str = "👋 Hello! I'm your Telco Customer Churn Assistant. I can help you predict if a customer is likely to churn. Just tell me about the customer in your own words, or provide their details!";

/// Conversation controller configuration.
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// Maximum time to wait for the backend before the turn fails with a timeout.
    pub request_timeout: Duration,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ConversationConfig {
    /// Creates a ConversationConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            request_timeout: Duration::from_secs(seconds),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            request_timeout: timeout,
        }
    }
}
