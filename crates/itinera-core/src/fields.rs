//! Input field model: the legal domain of every draft field.
//!
//! Each form field has a [`FieldModel`] describing how its raw value is
//! canonicalized ([`FieldModel::normalize`]) and whether that value is
//! acceptable ([`FieldModel::is_valid`]). The validator consults these models
//! and nothing else, so the rules for a field live in exactly one place.
//!
//! All models are pure. `normalize` is idempotent: normalizing an already
//! normalized value returns it unchanged.

use std::collections::BTreeMap;

use jiff::civil::Date;

use crate::models::{Budget, InterestSelection, CREATION_INTERESTS, WIZARD_INTERESTS};

/// Domain of one form field.
pub trait FieldModel {
    /// Raw value held by the draft.
    type Value;

    /// Whether the (normalized) value is acceptable for submission.
    fn is_valid(&self, value: &Self::Value) -> bool;

    /// Canonical form of the value.
    fn normalize(&self, value: &Self::Value) -> Self::Value;
}

/// Free-form destination text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationField;

impl FieldModel for LocationField {
    type Value = String;

    fn is_valid(&self, value: &String) -> bool {
        !value.trim().is_empty()
    }

    /// Trims surrounding whitespace. Inner spacing is kept as typed.
    fn normalize(&self, value: &String) -> String {
        value.trim().to_string()
    }
}

/// Trip start date, which may not lie in the past.
#[derive(Debug, Clone, Copy)]
pub struct StartDateField {
    pub today: Date,
}

impl StartDateField {
    pub fn new(today: Date) -> Self {
        Self { today }
    }
}

impl FieldModel for StartDateField {
    type Value = Date;

    fn is_valid(&self, value: &Date) -> bool {
        *value >= self.today
    }

    fn normalize(&self, value: &Date) -> Date {
        *value
    }
}

/// Number of days, entered as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayCountField;

impl DayCountField {
    /// Parses the day count, returning `None` for anything that is not an
    /// integer of at least one.
    pub fn parse(&self, value: &str) -> Option<u64> {
        value.trim().parse::<u64>().ok().filter(|days| *days >= 1)
    }
}

impl FieldModel for DayCountField {
    type Value = String;

    fn is_valid(&self, value: &String) -> bool {
        self.parse(value).is_some()
    }

    fn normalize(&self, value: &String) -> String {
        value.trim().to_string()
    }
}

/// Budget tier or amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetField;

impl FieldModel for BudgetField {
    type Value = Budget;

    fn is_valid(&self, value: &Budget) -> bool {
        value.is_positive()
    }

    fn normalize(&self, value: &Budget) -> Budget {
        *value
    }
}

/// Interest tags or per-interest scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestsField;

/// Alternate spellings the planning service maps onto catalog names.
const INTEREST_ALIASES: [(&str, &str); 1] = [("ArtAndCulture", "Art & Culture")];

impl InterestsField {
    fn canonical_tag(tag: &str) -> String {
        let trimmed = tag.trim();
        INTEREST_ALIASES
            .iter()
            .find(|(alias, _)| *alias == trimmed)
            .map_or_else(|| trimmed.to_string(), |(_, name)| (*name).to_string())
    }

    /// Tags outside the catalog their selection form draws from: the
    /// creation screen's list for tag sets, the service catalog for score
    /// maps.
    pub fn unknown_tags<'a>(&self, value: &'a InterestSelection) -> Vec<&'a str> {
        match value {
            InterestSelection::TagSet(tags) => tags
                .iter()
                .map(String::as_str)
                .filter(|tag| !CREATION_INTERESTS.contains(tag))
                .collect(),
            InterestSelection::ScoreMap(map) => map
                .keys()
                .map(String::as_str)
                .filter(|tag| !WIZARD_INTERESTS.contains(tag))
                .collect(),
        }
    }
}

impl FieldModel for InterestsField {
    type Value = InterestSelection;

    fn is_valid(&self, value: &InterestSelection) -> bool {
        !value.is_empty()
    }

    /// Trims tags, drops empty ones and duplicates (keeping the first
    /// selection), and resolves aliases in score-map keys. When an alias and
    /// its canonical name are both present the canonical entry wins.
    fn normalize(&self, value: &InterestSelection) -> InterestSelection {
        match value {
            InterestSelection::TagSet(tags) => {
                let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
                for tag in tags {
                    let tag = tag.trim();
                    if !tag.is_empty() && !normalized.iter().any(|t| t == tag) {
                        normalized.push(tag.to_string());
                    }
                }
                InterestSelection::TagSet(normalized)
            }
            InterestSelection::ScoreMap(map) => {
                let mut normalized = BTreeMap::new();
                for (tag, score) in map {
                    let canonical = Self::canonical_tag(tag);
                    if canonical.is_empty() {
                        continue;
                    }
                    let is_exact = canonical == tag.trim();
                    if is_exact || !normalized.contains_key(&canonical) {
                        normalized.insert(canonical, *score);
                    }
                }
                InterestSelection::ScoreMap(normalized)
            }
        }
    }
}
