//! Data models for plan drafts, wire requests and service responses.
//!
//! The models fall into three groups:
//!
//! 1. **Field values** ([`Budget`], [`BudgetTier`], [`InterestSelection`],
//!    [`InterestScore`], [`TravelType`]): the typed domain of each form field.
//! 2. **Requests** ([`PlanRequestDraft`], [`PlanRequest`], [`HotelSearch`]):
//!    the editable draft and the immutable wire body built from it.
//! 3. **Responses** ([`GeneratedPlan`], [`PlanResponse`], [`Hotel`],
//!    [`HealthStatus`]): what the planning service sends back. Unknown fields
//!    are kept in `extra` maps rather than dropped.
//!
//! # Examples
//!
//! ```rust
//! use itinera_core::models::{BudgetTier, PlanRequestDraft};
//! use jiff::civil::date;
//!
//! let draft = PlanRequestDraft::new()
//!     .with_location("Paris")
//!     .with_start_date(date(2025, 6, 1))
//!     .with_days(3)
//!     .with_budget(BudgetTier::Medium)
//!     .toggle_interest("Art")
//!     .toggle_interest("Food");
//!
//! assert_eq!(draft.interests().names(), vec!["Art", "Food"]);
//! ```

pub mod budget;
pub mod draft;
pub mod hotel;
pub mod interests;
pub mod plan;
pub mod request;
pub mod travel;


pub use budget::{Budget, BudgetTier};
pub use draft::PlanRequestDraft;
pub use hotel::{Hotel, HotelSearch};
pub use interests::{
    InterestScore, InterestSelection, CREATION_INTERESTS, WIZARD_INTERESTS,
};
pub use plan::{DailyItinerary, GeneratedPlan, HealthStatus, PlanId, PlanResponse, TimeSlot};
pub use request::PlanRequest;
pub use travel::TravelType;
