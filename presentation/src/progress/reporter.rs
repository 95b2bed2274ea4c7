//! Pending indicators shown while a turn is in flight

use churn_application::TurnProgressNotifier;
use churn_domain::TurnOutcome;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

const PENDING_MESSAGE: &str = "Thinking...";

/// Spinner on stderr while waiting for the backend
pub struct TurnSpinner {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TurnSpinner {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for TurnSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgressNotifier for TurnSpinner {
    fn on_turn_start(&self, _message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(PENDING_MESSAGE.dimmed().to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_turn_complete(&self, _outcome: &TurnOutcome) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress for non-interactive output
pub struct SimpleProgress;

impl TurnProgressNotifier for SimpleProgress {
    fn on_turn_start(&self, _message: &str) {
        eprintln!("{} {}", "->".cyan(), PENDING_MESSAGE);
    }

    fn on_turn_complete(&self, outcome: &TurnOutcome) {
        match outcome.failure_reason() {
            None => eprintln!("  {} reply received", "v".green()),
            Some(reason) => eprintln!("  {} {}", "x".red(), reason),
        }
    }
}
