//! Parameter structures for Itinera operations
//!
//! These structures carry raw user input from an interface layer (the CLI
//! today) into the core without any framework-specific derives. Each
//! interface wraps them with its own derives and converts with `.into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Typed Draft /  │
//! │  (clap derives) │───▶│  (raw text)     │───▶│  Search / Id    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Conversion into typed values rejects text that cannot be a value of the
//! field at all (an unparseable date, a score outside [0, 1]) with
//! `ItineraError::InvalidInput`. Text that parses but breaks a plan rule,
//! such as a zero day count, is left for the validator so every rule is
//! reported together.
//!
//! ```rust
//! use itinera_core::params::CreatePlan;
//! use jiff::civil::date;
//!
//! let params = CreatePlan {
//!     location: "Lisbon".to_string(),
//!     days: Some("4".to_string()),
//!     interests: vec!["Food".to_string(), "Music".to_string()],
//!     ..Default::default()
//! };
//! let draft = params.into_draft(date(2025, 5, 1))?;
//! assert_eq!(draft.start_date(), Some(date(2025, 5, 1)));
//! assert_eq!(draft.interests().names(), vec!["Food", "Music"]);
//! # Ok::<(), itinera_core::ItineraError>(())
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ItineraError, Result},
    models::{
        Budget, HotelSearch, InterestScore, InterestSelection, PlanId, PlanRequestDraft, TravelType,
    },
};

/// Parameters for creating or editing a plan.
///
/// Every field is raw text as typed by the user. Unset optional fields fall
/// back to the creation defaults: today, three days, a medium budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Destination city or region
    pub location: String,
    /// First day of the trip as `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Number of days, kept as text until validation
    pub days: Option<String>,
    /// `low`, `medium`, `high` or a positive amount
    pub budget: Option<String>,
    /// Interest tags in selection order
    #[serde(default)]
    pub interests: Vec<String>,
    /// Weighted interests as `Tag=score` pairs
    #[serde(default)]
    pub scores: Vec<String>,
    /// Who is travelling
    pub travel_type: Option<String>,
}

impl CreatePlan {
    /// Converts the raw input into an editable draft.
    ///
    /// Tags and scores are exclusive: when any score is given the selection
    /// becomes a score map and plain tags are rejected.
    ///
    /// # Errors
    ///
    /// * `ItineraError::InvalidInput` - When the start date, budget, travel
    ///   type or a score cannot be parsed, or tags and scores are mixed
    pub fn into_draft(self, today: Date) -> Result<PlanRequestDraft> {
        let mut draft = PlanRequestDraft::creation_defaults(today).with_location(self.location);

        if let Some(text) = self.start_date {
            draft = draft.with_start_date(parse_date("start_date", &text)?);
        }
        if let Some(days) = self.days {
            draft = draft.with_days_text(days);
        }
        if let Some(text) = self.budget {
            let budget: Budget = text
                .parse()
                .map_err(|reason: String| ItineraError::invalid_input("budget").with_reason(reason))?;
            draft = draft.with_budget(budget);
        }
        if let Some(text) = self.travel_type {
            let travel_type: TravelType = text.parse().map_err(|reason: String| {
                ItineraError::invalid_input("travel_type").with_reason(reason)
            })?;
            draft = draft.with_travel_type(Some(travel_type));
        }

        if !self.scores.is_empty() && !self.interests.is_empty() {
            return Err(ItineraError::invalid_input("interests")
                .with_reason("Choose either interest tags or interest scores, not both"));
        }
        if !self.interests.is_empty() {
            draft = draft.with_interests(InterestSelection::tags(self.interests));
        }
        for pair in &self.scores {
            let (tag, score) = parse_score(pair)?;
            draft = draft.with_interest_score(tag, score);
        }

        Ok(draft)
    }
}

/// Parameters for operations on an existing plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanIdParam {
    /// Identifier returned when the plan was generated
    pub plan_id: String,
}

impl PlanIdParam {
    /// # Errors
    ///
    /// * `ItineraError::InvalidInput` - When the identifier is blank
    pub fn plan_id(&self) -> Result<PlanId> {
        let id = self.plan_id.trim();
        if id.is_empty() {
            return Err(ItineraError::invalid_input("plan_id").with_reason("Plan ID cannot be empty"));
        }
        Ok(PlanId::new(id))
    }
}

/// Parameters for a hotel search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelQuery {
    pub location: String,
    /// Check-in date as `YYYY-MM-DD`
    pub checkin: String,
    /// Check-out date as `YYYY-MM-DD`
    pub checkout: String,
}

impl TryFrom<HotelQuery> for HotelSearch {
    type Error = ItineraError;

    fn try_from(query: HotelQuery) -> Result<Self> {
        let checkin = parse_date("checkin", &query.checkin)?;
        let checkout = parse_date("checkout", &query.checkout)?;
        HotelSearch::new(query.location, checkin, checkout)
    }
}

fn parse_date(field: &str, text: &str) -> Result<Date> {
    text.trim().parse().map_err(|_| {
        ItineraError::invalid_input(field)
            .with_reason(format!("'{}' is not a date in YYYY-MM-DD form", text.trim()))
    })
}

/// Parses one `Tag=score` pair.
fn parse_score(pair: &str) -> Result<(String, InterestScore)> {
    let invalid = || {
        ItineraError::invalid_input("interests")
            .with_reason(format!("'{pair}' is not of the form Tag=score"))
    };
    let (tag, score) = pair.rsplit_once('=').ok_or_else(invalid)?;
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(invalid());
    }
    let score: f64 = score.trim().parse().map_err(|_| invalid())?;
    Ok((tag.to_string(), InterestScore::new(score)?))
}
