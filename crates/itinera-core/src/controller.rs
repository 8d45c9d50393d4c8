//! Submission controller for plan creation.
//!
//! The controller drives one draft through validate → assemble → send →
//! settle and records where it is in that sequence:
//!
//! ```text
//!            submit()                  response / failure
//!   Idle ───────────────▶ Submitting ───────────────────────▶ Settled
//!    ▲                        │ submit() while here is ignored   │
//!    └──────── reset() ───────┴──────────────── submit() ◀───────┘
//! ```
//!
//! Validation failures settle without touching the network. A server or
//! transport failure settles with a single user-facing message. Nothing is
//! retried automatically; calling [`SubmissionController::submit`] again
//! after a failure is the retry.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{info, warn};
use thiserror::Error;

use crate::{
    assembler::assemble,
    client::{ApiError, PlanningApi},
    clock::{Clock, SystemClock},
    models::{PlanId, PlanRequestDraft},
    validator::{ValidationErrors, Validator},
    ItineraError,
};

/// Message shown when the server gives no usable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to create plan. Please try again.";

/// A failed plan submission, reduced to what the user should read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SubmissionError {
    message: String,
    status: Option<u16>,
}

impl SubmissionError {
    /// Uses the server's detail when present, the generic message otherwise.
    pub fn from_api(err: &ApiError) -> Self {
        Self {
            message: err
                .detail()
                .map_or_else(|| GENERIC_FAILURE_MESSAGE.to_string(), str::to_string),
            status: err.status(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

/// Why a submission settled without a plan.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionFailure {
    /// The draft broke one or more rules; no request was sent
    Validation(ValidationErrors),
    /// The request was sent and failed
    Server(SubmissionError),
    /// The validated draft could not be assembled; a bug
    Assertion(String),
}

impl SubmissionFailure {
    /// Every message to show, in order.
    pub fn messages(&self) -> Vec<String> {
        match self {
            SubmissionFailure::Validation(errors) => {
                errors.errors().iter().map(|e| e.message.clone()).collect()
            }
            SubmissionFailure::Server(err) => vec![err.message().to_string()],
            SubmissionFailure::Assertion(message) => vec![message.clone()],
        }
    }
}

/// Final result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    Success(PlanId),
    Failure(SubmissionFailure),
}

impl Settlement {
    pub fn is_success(&self) -> bool {
        matches!(self, Settlement::Success(_))
    }

    pub fn plan_id(&self) -> Option<&PlanId> {
        match self {
            Settlement::Success(id) => Some(id),
            Settlement::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&SubmissionFailure> {
        match self {
            Settlement::Success(_) => None,
            Settlement::Failure(failure) => Some(failure),
        }
    }
}

/// Where the controller is in the submission sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Settled(Settlement),
}

/// What a call to [`SubmissionController::submit`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The attempt ran to completion
    Settled(Settlement),
    /// Another attempt was already in flight; nothing happened
    Ignored,
}

impl SubmitOutcome {
    pub fn settlement(&self) -> Option<&Settlement> {
        match self {
            SubmitOutcome::Settled(settlement) => Some(settlement),
            SubmitOutcome::Ignored => None,
        }
    }
}

/// Marks an attempt as in flight; if dropped before settling (the caller
/// abandoned the future), returns the controller to `Idle`.
struct InFlight<'a> {
    status: &'a Mutex<SubmissionStatus>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, settlement: Settlement) -> Settlement {
        *lock(self.status) = SubmissionStatus::Settled(settlement.clone());
        self.settled = true;
        settlement
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *lock(self.status) = SubmissionStatus::Idle;
        }
    }
}

fn lock(status: &Mutex<SubmissionStatus>) -> MutexGuard<'_, SubmissionStatus> {
    status.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Orchestrates plan creation for a single draft owner.
pub struct SubmissionController<A> {
    api: A,
    clock: Box<dyn Clock>,
    status: Mutex<SubmissionStatus>,
}

impl<A: PlanningApi> SubmissionController<A> {
    /// Creates an idle controller that validates against the system date.
    pub fn new(api: A) -> Self {
        Self {
            api,
            clock: Box::new(SystemClock),
            status: Mutex::new(SubmissionStatus::Idle),
        }
    }

    /// Replaces the clock used to decide what "today" is.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the current status.
    pub fn status(&self) -> SubmissionStatus {
        lock(&self.status).clone()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(*lock(&self.status), SubmissionStatus::Submitting)
    }

    /// Returns a settled controller to `Idle`. Does nothing while an attempt
    /// is in flight.
    pub fn reset(&self) {
        let mut status = lock(&self.status);
        if !matches!(*status, SubmissionStatus::Submitting) {
            *status = SubmissionStatus::Idle;
        }
    }

    /// Validates, assembles and sends the draft, making at most one network
    /// call.
    ///
    /// Returns [`SubmitOutcome::Ignored`] without doing anything if another
    /// submission on this controller has not settled yet.
    pub async fn submit(&self, draft: &PlanRequestDraft) -> SubmitOutcome {
        let in_flight = {
            let mut status = lock(&self.status);
            if matches!(*status, SubmissionStatus::Submitting) {
                info!("Submission already in flight; ignoring duplicate submit");
                return SubmitOutcome::Ignored;
            }
            *status = SubmissionStatus::Submitting;
            InFlight {
                status: &self.status,
                settled: false,
            }
        };

        let validated = match Validator::new(self.clock.today()).validate(draft) {
            Ok(validated) => validated,
            Err(errors) => {
                warn!("Plan submission rejected: {errors}");
                let failure = SubmissionFailure::Validation(errors);
                return SubmitOutcome::Settled(in_flight.settle(Settlement::Failure(failure)));
            }
        };

        let request = match assemble(&validated) {
            Ok(request) => request,
            Err(err) => {
                let message = match err {
                    ItineraError::Assertion { message } => message,
                    other => other.to_string(),
                };
                warn!("Plan request assembly failed: {message}");
                let failure = SubmissionFailure::Assertion(message);
                return SubmitOutcome::Settled(in_flight.settle(Settlement::Failure(failure)));
            }
        };

        info!("Submitting plan request for {}", request.location());
        let settlement = match self.api.generate_plan(&request).await {
            Ok(plan) => {
                info!("Plan {} created", plan.plan_id);
                Settlement::Success(plan.plan_id)
            }
            Err(err) => {
                warn!("Plan submission failed: {err}");
                Settlement::Failure(SubmissionFailure::Server(SubmissionError::from_api(&err)))
            }
        };
        SubmitOutcome::Settled(in_flight.settle(settlement))
    }
}
