//! The editable plan request draft.

use jiff::civil::Date;

use super::{Budget, BudgetTier, InterestScore, InterestSelection, TravelType};

/// Raw field state of a plan creation form.
///
/// Drafts are values: every `with_*` method consumes the draft and returns a
/// new one, so a screen replaces its draft wholesale on each field change and
/// any earlier snapshot stays untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanRequestDraft {
    location: String,
    start_date: Option<Date>,
    days: String,
    budget: Option<Budget>,
    interests: InterestSelection,
    travel_type: Option<TravelType>,
}

impl PlanRequestDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft pre-filled the way the creation screen opens: starting
    /// today, three days, medium budget, no interests selected.
    pub fn creation_defaults(today: Date) -> Self {
        Self {
            start_date: Some(today),
            days: "3".to_string(),
            budget: Some(Budget::Tier(BudgetTier::Medium)),
            ..Self::default()
        }
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self
        }
    }

    pub fn with_start_date(self, start_date: Date) -> Self {
        Self {
            start_date: Some(start_date),
            ..self
        }
    }

    pub fn without_start_date(self) -> Self {
        Self {
            start_date: None,
            ..self
        }
    }

    /// Sets the day count from raw text as typed into the form.
    pub fn with_days_text(self, days: impl Into<String>) -> Self {
        Self {
            days: days.into(),
            ..self
        }
    }

    pub fn with_days(self, days: u64) -> Self {
        self.with_days_text(days.to_string())
    }

    pub fn with_budget(self, budget: impl Into<Budget>) -> Self {
        Self {
            budget: Some(budget.into()),
            ..self
        }
    }

    pub fn without_budget(self) -> Self {
        Self {
            budget: None,
            ..self
        }
    }

    pub fn with_interests(self, interests: InterestSelection) -> Self {
        Self { interests, ..self }
    }

    /// Selects or deselects an interest tag.
    pub fn toggle_interest(mut self, tag: impl Into<String>) -> Self {
        self.interests = std::mem::take(&mut self.interests).toggle(tag);
        self
    }

    /// Sets a preference score for an interest.
    pub fn with_interest_score(mut self, tag: impl Into<String>, score: InterestScore) -> Self {
        self.interests = std::mem::take(&mut self.interests).with_score(tag, score);
        self
    }

    pub fn with_travel_type(self, travel_type: Option<TravelType>) -> Self {
        Self {
            travel_type,
            ..self
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn start_date(&self) -> Option<Date> {
        self.start_date
    }

    pub fn days(&self) -> &str {
        &self.days
    }

    pub fn budget(&self) -> Option<Budget> {
        self.budget
    }

    pub fn interests(&self) -> &InterestSelection {
        &self.interests
    }

    pub fn travel_type(&self) -> Option<TravelType> {
        self.travel_type
    }
}
