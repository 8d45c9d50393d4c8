//! Hotel search query and results.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::plan::string_or_number_or_null;
use crate::error::{ItineraError, Result};

/// A hotel returned by the search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number_or_null")]
    pub price: String,
    #[serde(default, deserialize_with = "string_or_number_or_null")]
    pub rating: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A validated hotel search: a location and a stay of at least one night.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelSearch {
    location: String,
    checkin: Date,
    checkout: Date,
}

impl HotelSearch {
    /// Creates a search, rejecting an empty location and a checkout that is
    /// not after checkin.
    pub fn new(location: impl Into<String>, checkin: Date, checkout: Date) -> Result<Self> {
        let location = location.into().trim().to_string();
        if location.is_empty() {
            return Err(ItineraError::invalid_input("location")
                .with_reason("Please enter a location"));
        }
        if checkout <= checkin {
            return Err(ItineraError::invalid_input("checkout").with_reason(format!(
                "Check-out date {checkout} must be after check-in date {checkin}"
            )));
        }
        Ok(Self {
            location,
            checkin,
            checkout,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn checkin(&self) -> Date {
        self.checkin
    }

    pub fn checkout(&self) -> Date {
        self.checkout
    }

    /// Query pairs in the order the search endpoint documents them.
    pub fn query(&self) -> [(&'static str, String); 3] {
        [
            ("location", self.location.clone()),
            ("checkin", self.checkin.to_string()),
            ("checkout", self.checkout.to_string()),
        ]
    }
}
