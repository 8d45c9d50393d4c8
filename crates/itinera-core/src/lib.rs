//! Core library for the Itinera trip planning client.
//!
//! This crate turns what a traveller types into a well-formed plan request,
//! sends it to the planning service at most once per submission, and reports
//! the outcome as either a plan identifier or messages a person can act on.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌───────────┐   ┌───────────┐   ┌─────────────┐
//! │ Draft        │──▶│ Validator │──▶│ Assembler │──▶│ PlanningApi │
//! │ (raw fields) │   │ (rules)   │   │ (wire)    │   │ (HTTP)      │
//! └──────────────┘   └───────────┘   └───────────┘   └─────────────┘
//!         ▲                 SubmissionController                │
//!         └───────────── Settled(Success | Failure) ◀───────────┘
//! ```
//!
//! - **Models** ([`models`]): drafts, field values, wire request and service
//!   responses
//! - **Field models** ([`fields`]): per-field validity and normalization
//! - **Validation** ([`validator`]): every rule, in a fixed order
//! - **Assembly** ([`assembler`]): validated draft to wire request
//! - **Submission** ([`controller`]): the single-flight state machine
//! - **Client** ([`client`]): the planning service over JSON/HTTP
//! - **Display** ([`display`]): markdown rendering of results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use itinera_core::{
//!     models::{BudgetTier, PlanRequestDraft},
//!     PlanningClientBuilder, Settlement, SubmissionController, SubmitOutcome,
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PlanningClientBuilder::new()
//!     .with_base_url(Some("http://localhost:8000"))
//!     .build()?;
//! let controller = SubmissionController::new(client);
//!
//! let draft = PlanRequestDraft::new()
//!     .with_location("Paris")
//!     .with_start_date(date(2030, 6, 1))
//!     .with_days(3)
//!     .with_budget(BudgetTier::Medium)
//!     .toggle_interest("Art");
//!
//! match controller.submit(&draft).await {
//!     SubmitOutcome::Settled(Settlement::Success(plan_id)) => println!("Plan {plan_id}"),
//!     SubmitOutcome::Settled(Settlement::Failure(failure)) => {
//!         for message in failure.messages() {
//!             eprintln!("{message}");
//!         }
//!     }
//!     SubmitOutcome::Ignored => {}
//! }
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod client;
pub mod clock;
pub mod controller;
pub mod display;
pub mod error;
pub mod fields;
pub mod models;
pub mod params;
pub mod validator;

// Re-export commonly used types
pub use assembler::{assemble, prepare};
pub use client::{
    ApiError, ClientConfig, HttpPlanningClient, PlanningApi, PlanningClientBuilder,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{
    Settlement, SubmissionController, SubmissionError, SubmissionFailure, SubmissionStatus,
    SubmitOutcome, GENERIC_FAILURE_MESSAGE,
};
pub use display::{CreatedPlan, Hotels, Itinerary, SettlementReport};
pub use error::{ItineraError, Result};
pub use models::{
    Budget, BudgetTier, GeneratedPlan, Hotel, HotelSearch, InterestSelection, PlanId, PlanRequest,
    PlanRequestDraft, PlanResponse, TravelType,
};
pub use params::{CreatePlan, HotelQuery, PlanIdParam};
pub use validator::{FailureKind, ValidatedDraft, ValidationErrors, Validator};
