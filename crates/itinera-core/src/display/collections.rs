//! Collection wrapper types for displaying groups of response objects.

use std::fmt;

use crate::models::{DailyItinerary, Hotel};

/// Newtype wrapper for displaying hotel search results.
///
/// # Examples
///
/// ```rust
/// use itinera_core::{display::Hotels, models::Hotel};
///
/// let hotel: Hotel = serde_json::from_str(r#"{"name": "Ibis", "price": "89", "rating": 4.1}"#)?;
/// let output = Hotels(vec![hotel]).to_string();
/// assert!(output.contains("**Ibis**, 89, rated 4.1"));
///
/// assert_eq!(Hotels(vec![]).to_string(), "No hotels found.\n");
/// # Ok::<(), serde_json::Error>(())
/// ```
pub struct Hotels(pub Vec<Hotel>);

impl fmt::Display for Hotels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No hotels found.")
        } else {
            for hotel in &self.0 {
                write!(f, "{hotel}")?;
            }
            Ok(())
        }
    }
}

/// Day-by-day rendering of a plan's itinerary.
pub struct Itinerary<'a>(pub &'a [DailyItinerary]);

impl fmt::Display for Itinerary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No itinerary in this plan yet.");
        }
        for day in self.0 {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}
