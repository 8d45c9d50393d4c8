//! Conversion of validated drafts into wire requests.

use jiff::civil::Date;

use crate::{
    error::{ItineraError, Result},
    models::{PlanRequest, PlanRequestDraft},
    validator::{ValidatedDraft, Validator},
};

/// Builds the wire request for a validated draft.
///
/// The conversion is pure and deterministic: assembling the same draft twice
/// yields identical requests, and identical JSON bodies. The start date is
/// written from its calendar components only, so no time zone can shift it.
///
/// # Errors
///
/// Returns `ItineraError::Assertion` when the draft breaks an invariant the
/// validator guarantees. That is a bug, not a user error.
///
/// # Examples
///
/// ```rust
/// use itinera_core::{assembler::assemble, models::{BudgetTier, PlanRequestDraft}, Validator};
/// use jiff::civil::date;
///
/// let draft = PlanRequestDraft::new()
///     .with_location("Paris")
///     .with_start_date(date(2025, 6, 1))
///     .with_days(3)
///     .with_budget(BudgetTier::Medium)
///     .toggle_interest("Art")
///     .toggle_interest("Food");
///
/// let validated = Validator::new(date(2025, 5, 1)).validate(&draft)?;
/// let request = assemble(&validated)?;
/// assert_eq!(
///     request.to_json()?,
///     r#"{"location":"Paris","start_date":"2025-06-01","days":3,"budget":"medium","interests":["Art","Food"]}"#
/// );
/// # Ok::<(), itinera_core::ItineraError>(())
/// ```
pub fn assemble(draft: &ValidatedDraft) -> Result<PlanRequest> {
    if draft.location().trim().is_empty() {
        return Err(ItineraError::assertion("validated draft has an empty location"));
    }
    if draft.days() == 0 {
        return Err(ItineraError::assertion("validated draft has a zero day count"));
    }
    if !draft.budget().is_positive() {
        return Err(ItineraError::assertion("validated draft has a non-positive budget"));
    }
    if draft.interests().is_empty() {
        return Err(ItineraError::assertion("validated draft has no interests"));
    }

    Ok(PlanRequest::from_parts(
        draft.location().to_string(),
        calendar_date(draft.start_date())?,
        draft.days(),
        draft.budget(),
        draft.interests().clone(),
        draft.travel_type(),
    ))
}

/// Validates a draft and assembles the request in one step.
///
/// # Errors
///
/// `ItineraError::Validation` carrying every violated rule, or
/// `ItineraError::Assertion` if assembly breaks an invariant.
pub fn prepare(validator: &Validator, draft: &PlanRequestDraft) -> Result<PlanRequest> {
    let validated = validator.validate(draft)?;
    assemble(&validated)
}

/// Formats a date as `YYYY-MM-DD`.
fn calendar_date(date: Date) -> Result<String> {
    let year = date.year();
    if !(0..=9999).contains(&year) {
        return Err(ItineraError::assertion(format!(
            "start date year {year} cannot be written as YYYY-MM-DD"
        )));
    }
    Ok(format!("{:04}-{:02}-{:02}", year, date.month(), date.day()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::json;

    use super::*;
    use crate::{
        models::{Budget, BudgetTier, InterestSelection, TravelType},
        validator::FailureKind,
    };

    fn validated(draft: PlanRequestDraft) -> ValidatedDraft {
        Validator::new(date(2025, 5, 1)).validate(&draft).unwrap()
    }

    fn paris() -> PlanRequestDraft {
        PlanRequestDraft::new()
            .with_location("Paris")
            .with_start_date(date(2025, 6, 1))
            .with_days(3)
            .with_budget(BudgetTier::Medium)
            .toggle_interest("Art")
            .toggle_interest("Food")
    }

    #[test]
    fn test_paris_scenario_wire_shape() {
        let request = assemble(&validated(paris())).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "location": "Paris",
                "start_date": "2025-06-01",
                "days": 3,
                "budget": "medium",
                "interests": ["Art", "Food"]
            })
        );
    }

    #[test]
    fn test_tag_order_follows_selection() {
        let draft = paris()
            .with_interests(InterestSelection::default())
            .toggle_interest("Music")
            .toggle_interest("Art")
            .toggle_interest("History");
        let request = assemble(&validated(draft)).unwrap();
        assert_eq!(request.interests().names(), vec!["Music", "Art", "History"]);
    }

    #[test]
    fn test_score_map_and_amount_wire_shape() {
        let draft = paris()
            .with_budget(1500.0)
            .with_interests(
                InterestSelection::scores([("Nature", 0.4), ("Historical", 0.9)]).unwrap(),
            )
            .with_travel_type(Some(TravelType::WithSpouse));
        let request = assemble(&validated(draft)).unwrap();
        assert_eq!(
            request.to_json().unwrap(),
            r#"{"location":"Paris","start_date":"2025-06-01","days":3,"budget":1500.0,"interests":{"Historical":0.9,"Nature":0.4},"travel_type":"With spouse"}"#
        );
    }

    #[test]
    fn test_assembly_is_byte_identical() {
        let draft = validated(
            paris().with_interests(
                InterestSelection::scores([("Sports", 0.1), ("Adventure", 1.0), ("Nature", 0.5)])
                    .unwrap(),
            ),
        );
        let first = assemble(&draft).unwrap().to_json().unwrap();
        let second = assemble(&draft).unwrap().to_json().unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_start_date_is_zero_padded() {
        let draft = paris().with_start_date(date(2025, 7, 4));
        let request = assemble(&validated(draft)).unwrap();
        assert_eq!(request.start_date(), "2025-07-04");
    }

    #[test]
    fn test_broken_invariant_is_an_assertion_failure() {
        let broken = ValidatedDraft::from_parts_unchecked(
            "Paris".to_string(),
            date(2025, 6, 1),
            0,
            Budget::Tier(BudgetTier::Low),
            InterestSelection::tags(["Art"]),
        );
        assert!(matches!(
            assemble(&broken),
            Err(ItineraError::Assertion { .. })
        ));

        let no_interests = ValidatedDraft::from_parts_unchecked(
            "Paris".to_string(),
            date(2025, 6, 1),
            2,
            Budget::Tier(BudgetTier::Low),
            InterestSelection::default(),
        );
        assert!(matches!(
            assemble(&no_interests),
            Err(ItineraError::Assertion { .. })
        ));
    }

    #[test]
    fn test_prepare_reports_validation_errors() {
        let validator = Validator::new(date(2025, 5, 1));
        match prepare(&validator, &paris().with_location(" ")) {
            Err(ItineraError::Validation(errors)) => {
                assert_eq!(errors.kinds(), vec![FailureKind::MissingLocation]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(prepare(&validator, &paris()).unwrap().days(), 3);
    }
}
