//! Display formatting for service responses and submission outcomes.
//!
//! Response models implement [`std::fmt::Display`] directly; collections and
//! outcomes get newtype wrappers so each context can format them its own way.
//! All output is markdown, rendered to the terminal by the CLI.
//!
//! - [`collections`]: [`Hotels`] and [`Itinerary`]
//! - [`results`]: [`CreatedPlan`] and [`SettlementReport`]
//! - [`models`]: Display for plans, days, hotels and health
//!
//! ```rust
//! use itinera_core::{display::SettlementReport, models::PlanId, Settlement};
//!
//! let settled = Settlement::Success(PlanId::new("17"));
//! assert!(SettlementReport(&settled).to_string().contains("ID: 17"));
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::{Hotels, Itinerary};
pub use results::{CreatedPlan, SettlementReport};
