//! Conversation domain.
//!
//! - [`entities::Message`]: one turn in the transcript
//! - [`session::Session`]: the server-issued continuity token
//! - [`store::SessionStore`]: owner of the transcript and session
//! - [`turn`]: request/outcome value objects and the per-turn state

pub mod entities;
pub mod session;
pub mod store;
pub mod turn;
