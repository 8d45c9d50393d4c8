//! Draft validation.
//!
//! [`Validator::validate`] turns a [`PlanRequestDraft`] into a
//! [`ValidatedDraft`] or into the complete, ordered list of rule violations.
//! It never stops at the first failure, so a form can show every problem in
//! one pass. Validation is synchronous and performs no I/O.

use std::fmt;

use jiff::civil::Date;
use log::debug;
use serde::Serialize;

use crate::{
    fields::{BudgetField, DayCountField, FieldModel, InterestsField, LocationField, StartDateField},
    models::{Budget, InterestSelection, PlanRequestDraft, TravelType},
};

/// The rule a draft field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    MissingLocation,
    InvalidStartDate,
    InvalidDayCount,
    InvalidBudget,
    NoInterestsSelected,
}

impl FailureKind {
    /// Name of the draft field the rule applies to.
    pub fn field(&self) -> &'static str {
        match self {
            FailureKind::MissingLocation => "location",
            FailureKind::InvalidStartDate => "start_date",
            FailureKind::InvalidDayCount => "days",
            FailureKind::InvalidBudget => "budget",
            FailureKind::NoInterestsSelected => "interests",
        }
    }

    /// Message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            FailureKind::MissingLocation => "Please enter a location",
            FailureKind::InvalidStartDate => "Please choose a start date that is today or later",
            FailureKind::InvalidDayCount => "Please enter a number of days of at least 1",
            FailureKind::InvalidBudget => "Please choose a budget tier or enter an amount above 0",
            FailureKind::NoInterestsSelected => "Please select at least one interest",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: FailureKind,
    pub message: String,
}

impl From<FailureKind> for FieldError {
    fn from(kind: FailureKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

/// Every rule a draft violated, in rule order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The failure kinds, in rule order.
    pub fn kinds(&self) -> Vec<FailureKind> {
        self.0.iter().map(|e| e.kind).collect()
    }

    pub fn contains(&self, kind: FailureKind) -> bool {
        self.0.iter().any(|e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: an empty list is never constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// A draft that passed every rule, with every field normalized.
///
/// Only [`Validator::validate`] creates these.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    location: String,
    start_date: Date,
    days: u64,
    budget: Budget,
    interests: InterestSelection,
    travel_type: Option<TravelType>,
}

impl ValidatedDraft {
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn start_date(&self) -> Date {
        self.start_date
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

    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(
        location: String,
        start_date: Date,
        days: u64,
        budget: Budget,
        interests: InterestSelection,
    ) -> Self {
        Self {
            location,
            start_date,
            days,
            budget,
            interests,
            travel_type: None,
        }
    }
}

/// Validates drafts against a fixed notion of "today".
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    today: Date,
}

impl Validator {
    pub fn new(today: Date) -> Self {
        Self { today }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    /// Checks every rule and returns either the normalized draft or all
    /// violations.
    pub fn validate(
        &self,
        draft: &PlanRequestDraft,
    ) -> std::result::Result<ValidatedDraft, ValidationErrors> {
        let mut errors = Vec::new();

        let location_field = LocationField;
        let location = location_field.normalize(&draft.location().to_string());
        if !location_field.is_valid(&location) {
            errors.push(FailureKind::MissingLocation);
        }

        let start_field = StartDateField::new(self.today);
        let start_date = draft
            .start_date()
            .map(|d| start_field.normalize(&d))
            .filter(|d| start_field.is_valid(d));
        if start_date.is_none() {
            errors.push(FailureKind::InvalidStartDate);
        }

        let days_field = DayCountField;
        let days = days_field.parse(&days_field.normalize(&draft.days().to_string()));
        if days.is_none() {
            errors.push(FailureKind::InvalidDayCount);
        }

        let budget_field = BudgetField;
        let budget = draft
            .budget()
            .map(|b| budget_field.normalize(&b))
            .filter(|b| budget_field.is_valid(b));
        if budget.is_none() {
            errors.push(FailureKind::InvalidBudget);
        }

        let interests_field = InterestsField;
        let interests = interests_field.normalize(draft.interests());
        if !interests_field.is_valid(&interests) {
            errors.push(FailureKind::NoInterestsSelected);
        }

        match (start_date, days, budget) {
            (Some(start_date), Some(days), Some(budget)) if errors.is_empty() => {
                debug!("Draft for '{location}' passed validation");
                Ok(ValidatedDraft {
                    location,
                    start_date,
                    days,
                    budget,
                    interests,
                    travel_type: draft.travel_type(),
                })
            }
            _ => {
                debug!("Draft failed validation: {errors:?}");
                Err(ValidationErrors(errors.into_iter().map(FieldError::from).collect()))
            }
        }
    }
}
