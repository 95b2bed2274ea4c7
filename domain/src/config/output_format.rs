//! Output format value object

use serde::{Deserialize, Serialize};

/// How assistant replies are shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Formatted blocks with section styling (default)
    #[default]
    Pretty,
    /// Raw reply text exactly as received
    Plain,
    /// Formatted blocks as JSON
    Json,
}
