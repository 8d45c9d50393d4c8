//! Wire-format plan request.

use serde::Serialize;

use super::{Budget, InterestSelection, TravelType};

/// The exact JSON body sent to the planning service.
///
/// There is no public constructor: the only way to obtain one is through
/// [`crate::assembler::assemble`], which requires a
/// [`crate::validator::ValidatedDraft`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRequest {
    location: String,
    start_date: String,
    days: u64,
    budget: Budget,
    interests: InterestSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    travel_type: Option<TravelType>,
}

impl PlanRequest {
    pub(crate) fn from_parts(
        location: String,
        start_date: String,
        days: u64,
        budget: Budget,
        interests: InterestSelection,
        travel_type: Option<TravelType>,
    ) -> Self {
        Self {
            location,
            start_date,
            days,
            budget,
            interests,
            travel_type,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Start date as `YYYY-MM-DD`.
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn days(&self) -> u64 {
        self.days
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn interests(&self) -> &InterestSelection {
        &self.interests
    }

    pub fn travel_type(&self) -> Option<TravelType> {
        self.travel_type
    }

    /// Serializes the request body.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
