//! Response formatting.
//!
//! Turns the backend's constrained pseudo-markup into typed [`Block`]s. The
//! output is data, never markup: renderers decide how each block looks.

pub mod block;
pub mod parser;

#[cfg(test)]
mod proptests;

pub use block::{Block, BlockGroup, SectionLabel, Tone};
pub use parser::{format_response, group_sections};
