//! Plan responses returned by the planning service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifier of a generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlanId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PlanId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(raw: StringOrNumber) -> Self {
        match raw {
            StringOrNumber::Text(text) => text,
            StringOrNumber::Number(number) => number.to_string(),
        }
    }
}

/// Accepts either a JSON string or a JSON number and yields its text.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

/// Like [`string_or_number`], with `null` read as `None`.
pub(crate) fn optional_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

/// Text of a string or number, with `null` read as empty.
pub(crate) fn string_or_number_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_string_or_number(deserializer).map(Option::unwrap_or_default)
}

fn plan_id_from_string_or_number<'de, D>(deserializer: D) -> Result<PlanId, D::Error>
where
    D: Deserializer<'de>,
{
    string_or_number(deserializer).map(PlanId)
}

fn optional_plan_id<'de, D>(deserializer: D) -> Result<Option<PlanId>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_string_or_number(deserializer).map(|id| id.map(PlanId))
}

/// Response of `generate-plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    #[serde(deserialize_with = "plan_id_from_string_or_number")]
    pub plan_id: PlanId,

    /// Any other fields the service returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One time slot of a day's itinerary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// A single day of a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyItinerary {
    pub day: u32,
    #[serde(default)]
    pub morning: Option<TimeSlot>,
    #[serde(default)]
    pub afternoon: Option<TimeSlot>,
    #[serde(default)]
    pub late_afternoon: Option<TimeSlot>,
    #[serde(default)]
    pub evening: Option<TimeSlot>,
    #[serde(default)]
    pub dinner: Option<TimeSlot>,
    #[serde(default)]
    pub night: Option<TimeSlot>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DailyItinerary {
    /// Filled slots in chronological order, paired with their labels.
    pub fn slots(&self) -> Vec<(&'static str, &TimeSlot)> {
        [
            ("Morning", &self.morning),
            ("Afternoon", &self.afternoon),
            ("Late afternoon", &self.late_afternoon),
            ("Evening", &self.evening),
            ("Dinner", &self.dinner),
            ("Night", &self.night),
        ]
        .into_iter()
        .filter_map(|(label, slot)| slot.as_ref().map(|slot| (label, slot)))
        .collect()
    }
}

/// Response of `get-plan` and `edit-plan`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(default, deserialize_with = "optional_plan_id")]
    pub plan_id: Option<PlanId>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub days: Option<u64>,
    #[serde(default)]
    pub plan: Vec<DailyItinerary>,

    /// Hotel suggestion, free-form as produced by the planner
    #[serde(default, alias = "Hotel")]
    pub hotel: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlanResponse {
    /// Name of the suggested hotel, when the suggestion carries one.
    pub fn hotel_name(&self) -> Option<&str> {
        match self.hotel.as_ref()? {
            Value::String(name) => Some(name),
            Value::Object(fields) => fields.get("name").and_then(Value::as_str),
            _ => None,
        }
    }
}

/// Response of `health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
