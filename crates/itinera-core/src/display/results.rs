//! Result wrapper types for displaying submission outcomes.

use std::fmt;

use crate::{
    controller::{Settlement, SubmissionFailure},
    models::PlanId,
};

/// Wrapper type for displaying a newly created plan.
///
/// # Examples
///
/// ```rust
/// use itinera_core::{display::CreatedPlan, models::PlanId};
///
/// let output = CreatedPlan(PlanId::new("42")).to_string();
/// assert!(output.contains("Created plan with ID: 42"));
/// ```
pub struct CreatedPlan(pub PlanId);

impl fmt::Display for CreatedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.0)?;
        writeln!(f)?;
        writeln!(f, "Run `itinera plan show {}` to see the itinerary.", self.0)
    }
}

impl fmt::Display for SubmissionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionFailure::Validation(errors) => {
                writeln!(f, "Please fix the following before submitting:")?;
                writeln!(f)?;
                for error in errors.errors() {
                    writeln!(f, "- {}", error.message)?;
                }
                Ok(())
            }
            SubmissionFailure::Server(err) => writeln!(f, "Error: {}", err.message()),
            SubmissionFailure::Assertion(message) => {
                writeln!(f, "Error: internal failure while building the request: {message}")
            }
        }
    }
}

/// Wrapper type for displaying a settled submission, success or failure.
pub struct SettlementReport<'a>(pub &'a Settlement);

impl fmt::Display for SettlementReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Settlement::Success(id) => write!(f, "{}", CreatedPlan(id.clone())),
            Settlement::Failure(failure) => write!(f, "{failure}"),
        }
    }
}
