//! Conversation controller
//!
//! Drives one request/response turn at a time:
//!
//! ```text
//! Idle ──submit_turn──▶ Sending ──reply──▶ (Succeeded | Failed) ──▶ Idle
//! ```
//!
//! The user message is recorded before anything goes over the wire, and every
//! outcome, including timeouts and cancellation, is folded into the transcript
//! as an assistant message. Nothing is ever returned to the caller as an error.

use crate::config::ConversationConfig;
use crate::ports::churn_gateway::ChurnGateway;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, EVENT_ASSISTANT_RESPONSE, EVENT_SESSION_STARTED,
    EVENT_TURN_FAILED, EVENT_USER_MESSAGE, NoConversationLogger,
};
use crate::ports::progress::{NoTurnProgress, TurnProgressNotifier};
use churn_domain::{
    FailureReason, Message, Role, SessionStore, TurnOutcome, TurnRequest, TurnState,
    format_response,
};
use serde_json::json;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Why `submit_turn` did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Input was empty or whitespace only
    EmptyInput,
    /// Another turn is still in flight
    Busy,
}

/// What happened to a `submit_turn` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The call was a no-op; transcript and session are unchanged
    Rejected(RejectReason),
    /// A full turn ran and its outcome is now in the transcript
    Completed(TurnOutcome),
}

impl SubmitResult {
    pub fn outcome(&self) -> Option<&TurnOutcome> {
        match self {
            SubmitResult::Completed(outcome) => Some(outcome),
            SubmitResult::Rejected(_) => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SubmitResult::Rejected(_))
    }
}

/// Owns one conversation and runs its turns against a [`ChurnGateway`]
pub struct ConversationController<G: ChurnGateway + 'static> {
    gateway: Arc<G>,
    store: Mutex<SessionStore>,
    state: watch::Sender<TurnState>,
    in_flight: Mutex<Option<CancellationToken>>,
    config: ConversationConfig,
    progress: Arc<dyn TurnProgressNotifier>,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: ChurnGateway + 'static> ConversationController<G> {
    pub fn new(gateway: Arc<G>, store: SessionStore, config: ConversationConfig) -> Self {
        let (state, _) = watch::channel(TurnState::Idle);
        Self {
            gateway,
            store: Mutex::new(store),
            state,
            in_flight: Mutex::new(None),
            config,
            progress: Arc::new(NoTurnProgress),
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Set the progress notifier used around each turn
    pub fn with_progress(mut self, progress: Arc<dyn TurnProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Set the conversation logger
    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Run one turn.
    ///
    /// Rejected without side effects if `text` is blank or a turn is already in
    /// flight. Otherwise the returned outcome has already been recorded.
    pub async fn submit_turn(&self, text: &str) -> SubmitResult {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring empty input");
            return SubmitResult::Rejected(RejectReason::EmptyInput);
        }

        let started = self.state.send_if_modified(|state| {
            if state.is_sending() {
                false
            } else {
                *state = TurnState::Sending;
                true
            }
        });
        if !started {
            debug!("Turn already in flight, rejecting new input");
            return SubmitResult::Rejected(RejectReason::Busy);
        }
        let mut turn = TurnGuard {
            controller: self,
            recorded: false,
        };

        let token = CancellationToken::new();
        *self.lock_in_flight() = Some(token.clone());

        let request = {
            let mut store = self.lock_store();
            store.append_message(Role::User, text);
            TurnRequest::new(text, store.session_id().map(str::to_string))
        };

        self.logger.log(ConversationEvent::new(
            EVENT_USER_MESSAGE,
            json!({ "content": text, "session_id": request.session_id }),
        ));
        self.progress.on_turn_start(text);
        info!(
            "Sending turn (session: {})",
            request.session_id.as_deref().unwrap_or("<none>")
        );

        let outcome = self.exchange(&request, &token).await;
        self.lock_in_flight().take();
        self.record(&outcome);
        turn.recorded = true;
        self.progress.on_turn_complete(&outcome);

        SubmitResult::Completed(outcome)
    }

    /// Cancel the turn in flight, if any.
    ///
    /// The pending `submit_turn` completes with `Failure{Cancelled}` and any
    /// late reply is discarded. Returns `false` when idle.
    pub fn cancel_turn(&self) -> bool {
        match self.lock_in_flight().as_ref() {
            Some(token) => {
                info!("Cancelling turn in flight");
                token.cancel();
                true
            }
            None => false,
        }
    }

    async fn exchange(&self, request: &TurnRequest, token: &CancellationToken) -> TurnOutcome {
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                return TurnOutcome::Failure { reason: FailureReason::Cancelled };
            }
            result = tokio::time::timeout(
                self.config.request_timeout,
                self.gateway.send_turn(request),
            ) => result,
        };

        match result {
            Ok(Ok(reply)) => TurnOutcome::Success {
                response_text: reply.response,
                session_id: reply.session_id.filter(|id| !id.is_empty()),
            },
            Ok(Err(e)) => TurnOutcome::Failure { reason: e.into() },
            Err(_) => TurnOutcome::Failure {
                reason: FailureReason::Timeout,
            },
        }
    }

    fn record(&self, outcome: &TurnOutcome) {
        match outcome {
            TurnOutcome::Success {
                response_text,
                session_id,
            } => {
                let blocks = format_response(response_text);
                let established = {
                    let mut store = self.lock_store();
                    let established = session_id
                        .as_deref()
                        .is_some_and(|id| store.set_session_id_once(id));
                    store.append_assistant(response_text.clone(), blocks);
                    established
                };

                if established {
                    info!("Session established: {}", session_id.as_deref().unwrap_or_default());
                    self.logger.log(ConversationEvent::new(
                        EVENT_SESSION_STARTED,
                        json!({ "session_id": session_id }),
                    ));
                }
                self.logger.log(ConversationEvent::new(
                    EVENT_ASSISTANT_RESPONSE,
                    json!({ "content": response_text, "session_id": session_id }),
                ));
            }
            TurnOutcome::Failure { reason } => {
                warn!("Turn failed: {}", reason);
                let content = reason.user_message();
                let blocks = format_response(&content);
                self.lock_store().append_assistant(content.clone(), blocks);

                self.logger.log(ConversationEvent::new(
                    EVENT_TURN_FAILED,
                    json!({ "reason": reason.to_string(), "content": content }),
                ));
            }
        }
    }

    /// Current state of the per-turn state machine
    pub fn state(&self) -> TurnState {
        *self.state.borrow()
    }

    /// Whether a turn is awaiting its response
    pub fn is_sending(&self) -> bool {
        self.state().is_sending()
    }

    /// Observe state changes (e.g. to drive a pending indicator)
    pub fn subscribe(&self) -> watch::Receiver<TurnState> {
        self.state.subscribe()
    }

    /// Owned copy of the full transcript
    pub fn snapshot(&self) -> Vec<Message> {
        self.lock_store().snapshot().to_vec()
    }

    pub fn last_message(&self) -> Option<Message> {
        self.lock_store().last().cloned()
    }

    pub fn transcript_len(&self) -> usize {
        self.lock_store().len()
    }

    pub fn session_id(&self) -> Option<String> {
        self.lock_store().session_id().map(str::to_string)
    }

    fn lock_store(&self) -> MutexGuard<'_, SessionStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Returns the controller to `Idle` when a turn ends, even if the
/// `submit_turn` future is dropped before completion.
///
/// A dropped turn counts as cancelled: the notice is appended so the user
/// message still has its assistant reply.
struct TurnGuard<'a, G: ChurnGateway + 'static> {
    controller: &'a ConversationController<G>,
    recorded: bool,
}

impl<G: ChurnGateway + 'static> Drop for TurnGuard<'_, G> {
    fn drop(&mut self) {
        self.controller.lock_in_flight().take();
        if !self.recorded {
            debug!("Turn dropped before completion");
            let outcome = TurnOutcome::Failure {
                reason: FailureReason::Cancelled,
            };
            self.controller.record(&outcome);
            self.controller.progress.on_turn_complete(&outcome);
        }
        self.controller.state.send_replace(TurnState::Idle);
    }
}
