//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::output::renderer::ReplyRenderer;
use churn_application::{ChurnGateway, ConversationController, RejectReason, SubmitResult};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// Sample description shown under the prompt
pub const EXAMPLE_PROMPT: &str = "A female customer, 45 years old, has been with us for 12 months, uses fiber optic internet...";

/// Input is blocked while a reply is pending, so cancelling goes through Ctrl-C
const CANCEL_HINT: &str = "Press Ctrl-C while waiting for a reply to cancel it.";

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Session,
    History,
    Example,
    Cancel,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/session" => ReplCommand::Session,
            "/history" => ReplCommand::History,
            "/example" => ReplCommand::Example,
            "/cancel" => ReplCommand::Cancel,
            other => ReplCommand::Unknown(other.to_string()),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl<G: ChurnGateway + 'static> {
    controller: ConversationController<G>,
    renderer: ReplyRenderer,
    config: ReplConfig,
}

impl<G: ChurnGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl around a conversation
    pub fn new(controller: ConversationController<G>, renderer: ReplyRenderer) -> Self {
        Self {
            controller,
            renderer,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.process_turn(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         Churn Prediction Assistant          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();

        for message in self.controller.snapshot() {
            println!("{}", self.renderer.render_entry(&message));
            println!();
        }

        println!("{} {}", "Example:".dimmed(), EXAMPLE_PROMPT.dimmed());
        println!("Type /help for commands, Ctrl-C cancels a pending reply.");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?     - Show this help");
                println!("  /session          - Show the backend session id");
                println!("  /history          - Show the conversation so far");
                println!("  /example          - Show an example customer description");
                println!("  /cancel           - How to cancel a pending reply");
                println!("  /quit, /exit, /q  - Exit chat");
                println!();
                false
            }
            ReplCommand::Session => {
                match self.controller.session_id() {
                    Some(id) => println!("Session: {}", id),
                    None => println!("Session: (not established yet)"),
                }
                false
            }
            ReplCommand::History => {
                println!();
                for message in self.controller.snapshot() {
                    println!("{}", self.renderer.render_entry(&message));
                    println!();
                }
                false
            }
            ReplCommand::Example => {
                println!("{}", EXAMPLE_PROMPT);
                false
            }
            ReplCommand::Cancel => {
                println!("{}", CANCEL_HINT);
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_turn(&self, text: &str) {
        println!();

        let turn = self.controller.submit_turn(text);
        tokio::pin!(turn);

        let result = tokio::select! {
            result = &mut turn => result,
            _ = tokio::signal::ctrl_c() => {
                self.controller.cancel_turn();
                turn.await
            }
        };

        match result {
            SubmitResult::Completed(_) => {
                if let Some(reply) = self.controller.last_message() {
                    println!("{}", self.renderer.render(&reply));
                }
            }
            SubmitResult::Rejected(RejectReason::Busy) => {
                println!("Still waiting for the previous reply.");
            }
            SubmitResult::Rejected(RejectReason::EmptyInput) => {
                debug!("Skipped empty input");
            }
        }
        println!();
    }
}
