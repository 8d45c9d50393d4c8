//! Interest selections: an ordered tag set or a tag-to-score map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ItineraError, Result};

/// Interest tags offered by the trip creation screen.
pub const CREATION_INTERESTS: [&str; 10] = [
    "History",
    "Art",
    "Food",
    "Nature",
    "Adventure",
    "Shopping",
    "Nightlife",
    "Culture",
    "Architecture",
    "Music",
];

/// Interest catalog accepted by the planning service for score maps.
pub const WIZARD_INTERESTS: [&str; 8] = [
    "Historical",
    "Art & Culture",
    "Nature",
    "Entertainment",
    "Shopping",
    "Sports",
    "Adventure",
    "Relaxing",
];

/// A preference score in the closed range [0, 1].
///
/// The only constructor rejects anything outside the range, so an
/// out-of-range score can never be stored in a draft.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct InterestScore(f64);

impl InterestScore {
    /// Creates a score, rejecting NaN and values outside [0, 1].
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ItineraError::invalid_input("interests")
                .with_reason(format!("Interest score must be between 0 and 1, got {value}")))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for InterestScore {
    type Error = ItineraError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<InterestScore> for f64 {
    fn from(score: InterestScore) -> Self {
        score.0
    }
}

/// The user's interests in one of the two shapes the UI flows produce.
///
/// Serializes untagged: a tag set becomes a JSON array in selection order and
/// a score map becomes a JSON object with keys in sorted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterestSelection {
    TagSet(Vec<String>),
    ScoreMap(BTreeMap<String, InterestScore>),
}

impl Default for InterestSelection {
    fn default() -> Self {
        InterestSelection::TagSet(Vec::new())
    }
}

impl InterestSelection {
    /// Builds a tag set from tags in selection order.
    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InterestSelection::TagSet(tags.into_iter().map(Into::into).collect())
    }

    /// Builds a score map, rejecting any score outside [0, 1].
    pub fn scores<I, S>(scores: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let map = scores
            .into_iter()
            .map(|(tag, score)| Ok((tag.into(), InterestScore::new(score)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(InterestSelection::ScoreMap(map))
    }

    /// Selects a tag if absent, deselects it if present.
    ///
    /// A score map is replaced by a tag set holding just this tag.
    pub fn toggle(self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        match self {
            InterestSelection::TagSet(mut tags) => {
                if let Some(pos) = tags.iter().position(|t| *t == tag) {
                    tags.remove(pos);
                } else {
                    tags.push(tag);
                }
                InterestSelection::TagSet(tags)
            }
            InterestSelection::ScoreMap(_) => InterestSelection::TagSet(vec![tag]),
        }
    }

    /// Sets the score for a tag.
    ///
    /// A tag set is replaced by a score map holding just this entry.
    pub fn with_score(self, tag: impl Into<String>, score: InterestScore) -> Self {
        let mut map = match self {
            InterestSelection::ScoreMap(map) => map,
            InterestSelection::TagSet(_) => BTreeMap::new(),
        };
        map.insert(tag.into(), score);
        InterestSelection::ScoreMap(map)
    }

    pub fn len(&self) -> usize {
        match self {
            InterestSelection::TagSet(tags) => tags.len(),
            InterestSelection::ScoreMap(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tag names in order: selection order for tag sets, sorted for maps.
    pub fn names(&self) -> Vec<&str> {
        match self {
            InterestSelection::TagSet(tags) => tags.iter().map(String::as_str).collect(),
            InterestSelection::ScoreMap(map) => map.keys().map(String::as_str).collect(),
        }
    }

    /// Whether the selection contains the given tag.
    pub fn contains(&self, tag: &str) -> bool {
        match self {
            InterestSelection::TagSet(tags) => tags.iter().any(|t| t == tag),
            InterestSelection::ScoreMap(map) => map.contains_key(tag),
        }
    }
}
