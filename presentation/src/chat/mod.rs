//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface over one conversation.

mod repl;

pub use repl::{ChatRepl, EXAMPLE_PROMPT, ReplCommand};
