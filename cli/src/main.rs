//! CLI entrypoint for Churn Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use churn_application::{
    ConversationController, NoTurnProgress, SubmitResult, TurnProgressNotifier,
};
use churn_domain::SessionStore;
use churn_infrastructure::{ConfigLoader, FileConfig, HttpChurnGateway, JsonlConversationLogger};
use churn_presentation::{
    ChatRepl, Cli, OutputConfig, ReplConfig, ReplyRenderer, SimpleProgress, TurnSpinner,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    info!("Starting Churn Assistant against {}", config.backend.endpoint);

    let output = OutputConfig {
        format: config.output.format,
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }
    let renderer = ReplyRenderer::new(output.format);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpChurnGateway::new(
        &config.backend.endpoint,
        Duration::from_secs(config.backend.timeout_seconds),
    )?);

    let one_shot = cli.message.is_some();
    let store = match config.greeting() {
        Some(greeting) if !one_shot => SessionStore::with_greeting(greeting),
        _ => SessionStore::new(),
    };

    let progress: Arc<dyn TurnProgressNotifier> = if cli.quiet || !config.repl.show_progress {
        Arc::new(NoTurnProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(TurnSpinner::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let mut controller = ConversationController::new(gateway, store, config.conversation_config())
        .with_progress(progress);

    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Logging conversation to {}", logger.path().display());
                controller = controller.with_logger(Arc::new(logger));
            }
            None => warn!("Conversation log disabled"),
        }
    }

    // Single message mode
    if let Some(message) = cli.message.as_deref() {
        let outcome = match controller.submit_turn(message).await {
            SubmitResult::Completed(outcome) => outcome,
            SubmitResult::Rejected(reason) => bail!("Message was not sent: {:?}", reason),
        };

        if let Some(reply) = controller.last_message() {
            println!("{}", renderer.render(&reply));
        }

        if let Some(reason) = outcome.failure_reason() {
            bail!("Prediction request failed: {}", reason);
        }
        return Ok(());
    }

    // Chat mode
    let repl_config = ReplConfig {
        history_file: history_path(&config),
    };
    let repl = ChatRepl::new(controller, renderer).with_config(repl_config);
    repl.run().await?;

    Ok(())
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.backend.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.backend.timeout_seconds = timeout;
    }
    if let Some(format) = cli.output {
        config.output.format = format.into();
    }
    if cli.no_color {
        config.output.color = false;
    }
    if cli.no_greeting {
        config.conversation.show_greeting = false;
    }
    if let Some(path) = &cli.conversation_log {
        config.logging.conversation_log = Some(path.clone());
    }
}

fn history_path(config: &FileConfig) -> Option<PathBuf> {
    match &config.repl.history_file {
        Some(path) if path.is_empty() => None,
        Some(path) => Some(PathBuf::from(path)),
        None => ConfigLoader::default_history_path(),
    }
}
