//! Display implementations for service response models.
//!
//! Everything renders as markdown for the terminal renderer.

use std::fmt;

use super::collections::Itinerary;
use crate::models::{DailyItinerary, HealthStatus, Hotel, PlanResponse, TimeSlot};

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let activity = self.activity.as_deref().unwrap_or("Free time");
        match &self.time {
            Some(time) => write!(f, "{time}: {activity}")?,
            None => write!(f, "{activity}")?,
        }
        if let Some(duration) = &self.duration {
            write!(f, " ({duration})")?;
        }
        Ok(())
    }
}

impl fmt::Display for DailyItinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {}", self.day)?;
        writeln!(f)?;

        let slots = self.slots();
        if slots.is_empty() {
            writeln!(f, "Nothing scheduled.")?;
        }
        for (label, slot) in slots {
            writeln!(f, "- **{label}**: {slot}")?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.location, &self.plan_id) {
            (Some(location), Some(id)) => writeln!(f, "# {location} (plan {id})")?,
            (Some(location), None) => writeln!(f, "# {location}")?,
            (None, Some(id)) => writeln!(f, "# Plan {id}")?,
            (None, None) => writeln!(f, "# Plan")?,
        }
        writeln!(f)?;

        if let Some(start) = &self.start_date {
            writeln!(f, "- Starts: {start}")?;
        }
        if let Some(days) = self.days {
            writeln!(f, "- Days: {days}")?;
        }
        if let Some(hotel) = self.hotel_name() {
            writeln!(f, "- Hotel: {hotel}")?;
        }
        writeln!(f)?;

        write!(f, "{}", Itinerary(&self.plan))
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}**", self.name)?;
        if !self.price.is_empty() {
            write!(f, ", {}", self.price)?;
        }
        if !self.rating.is_empty() {
            write!(f, ", rated {}", self.rating)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_healthy() {
            writeln!(f, "Planning service is up ({})", self.status)
        } else {
            writeln!(f, "Planning service reports status: {}", self.status)
        }
    }
}
