//! Progress notification port
//!
//! Lets the presentation layer show a pending indicator while a turn is in flight.

use churn_domain::TurnOutcome;

/// Callbacks around one turn
///
/// Implementations live in the presentation layer (spinner, status line, ...).
pub trait TurnProgressNotifier: Send + Sync {
    /// Called after the user message is recorded and before the request is sent
    fn on_turn_start(&self, message: &str);

    /// Called once the outcome has been recorded in the transcript
    fn on_turn_complete(&self, outcome: &TurnOutcome);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoTurnProgress;

impl TurnProgressNotifier for NoTurnProgress {
    fn on_turn_start(&self, _message: &str) {}
    fn on_turn_complete(&self, _outcome: &TurnOutcome) {}
}
