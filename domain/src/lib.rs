//! Domain layer for churn-assistant
//!
//! This crate contains the conversation entities, the session store and the
//! response formatter. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! - **Session Store**: the append-only transcript plus the server-issued
//!   session identifier, which is set once and never overwritten.
//! - **Response Formatter**: a single-pass tokenizer that turns the backend's
//!   reply markup into typed blocks (sections, emphasis, line breaks, text).

pub mod config;
pub mod conversation;
pub mod formatting;

// Re-export commonly used types
pub use config::OutputFormat;
pub use conversation::{
    entities::{Message, Role},
    session::Session,
    store::SessionStore,
    turn::{FailureReason, TurnOutcome, TurnRequest, TurnState},
};
pub use formatting::{Block, BlockGroup, SectionLabel, Tone, format_response, group_sections};
