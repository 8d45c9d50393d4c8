//! Travel party type.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Who the traveler is going with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TravelType {
    #[serde(rename = "Solo")]
    Solo,
    #[serde(rename = "With spouse")]
    WithSpouse,
    #[serde(rename = "With family")]
    WithFamily,
    #[serde(rename = "With friends")]
    WithFriends,
}

impl TravelType {
    pub const ALL: [TravelType; 4] = [
        TravelType::Solo,
        TravelType::WithSpouse,
        TravelType::WithFamily,
        TravelType::WithFriends,
    ];

    /// Label shown in the UI and sent on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            TravelType::Solo => "Solo",
            TravelType::WithSpouse => "With spouse",
            TravelType::WithFamily => "With family",
            TravelType::WithFriends => "With friends",
        }
    }
}

impl FromStr for TravelType {
    type Err = String;

    /// Accepts the full label ("With spouse") or its short form ("spouse"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = short_form(&s.trim().to_lowercase()).to_string();
        TravelType::ALL
            .into_iter()
            .find(|travel_type| short_form(&travel_type.label().to_lowercase()) == key)
            .ok_or_else(|| {
                let labels = TravelType::ALL.map(|travel_type| travel_type.label());
                format!("Invalid travel type: {s}. Must be one of {}", labels.join(", "))
            })
    }
}

fn short_form(label: &str) -> &str {
    label.strip_prefix("with ").unwrap_or(label)
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
