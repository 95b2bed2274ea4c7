//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for assistant replies
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted sections with colors
    Pretty,
    /// Raw reply text
    Plain,
    /// Formatted blocks as JSON
    Json,
}

impl From<OutputFormat> for churn_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => churn_domain::OutputFormat::Pretty,
            OutputFormat::Plain => churn_domain::OutputFormat::Plain,
            OutputFormat::Json => churn_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for churn-assistant
#[derive(Parser, Debug)]
#[command(name = "churn-assistant")]
#[command(author, version, about = "Chat with a telco customer churn prediction service")]
#[command(long_about = r#"
Churn Assistant lets you describe a customer in your own words and get a
churn-risk assessment from a remote prediction service.

Without a message, an interactive chat starts. The backend keeps context
between turns through a session id issued on the first reply.

Configuration files are loaded from (in priority order):
1. CHURN_* environment variables
2. --config <path>     Explicit config file
3. ./churn.toml        Project-level config
4. ~/.config/churn-assistant/config.toml   Global config

Example:
  churn-assistant
  churn-assistant "A female customer, 45 years old, 12 months tenure, fiber optic internet"
  churn-assistant --endpoint http://localhost:8000/chat -o json "tenure: 2, contract: month-to-month"
"#)]
pub struct Cli {
    /// Describe a customer and exit after one reply (starts chat mode if omitted)
    pub message: Option<String>,

    /// Prediction backend chat endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not open the chat with the greeting message
    #[arg(long)]
    pub no_greeting: bool,

    /// Append conversation events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the pending indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_message_means_chat() {
        let cli = Cli::parse_from(["churn-assistant"]);
        assert!(cli.message.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_one_shot_with_overrides() {
        let cli = Cli::parse_from([
            "churn-assistant",
            "--endpoint",
            "http://localhost:8000/chat",
            "--timeout",
            "5",
            "-o",
            "json",
            "-vv",
            "tenure: 12",
        ]);
        assert_eq!(cli.message.as_deref(), Some("tenure: 12"));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:8000/chat"));
        assert_eq!(cli.timeout, Some(5));
        assert!(matches!(cli.output, Some(OutputFormat::Json)));
        assert_eq!(cli.verbose, 2);
    }
}
