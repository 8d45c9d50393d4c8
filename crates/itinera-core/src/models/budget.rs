//! Budget representations: a closed tier enumeration or a numeric amount.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of budget tiers offered by the creation screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetTier {
    /// Every tier in display order.
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Low, BudgetTier::Medium, BudgetTier::High];

    /// Tier labels joined for messages, in display order.
    fn choices() -> String {
        BudgetTier::ALL.map(|tier| tier.as_str()).join(", ")
    }

    /// Wire label for the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Low => "low",
            BudgetTier::Medium => "medium",
            BudgetTier::High => "high",
        }
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        BudgetTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == lowered)
            .ok_or_else(|| format!("Invalid budget tier: {s}. Must be one of {}", BudgetTier::choices()))
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trip budget, either as a tier label or as an amount in USD.
///
/// Serializes untagged, so a tier becomes `"medium"` and an amount becomes a
/// bare JSON number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Budget {
    Tier(BudgetTier),
    Amount(f64),
}

impl Budget {
    /// Returns true for amounts that are finite and strictly positive, and for
    /// every tier.
    pub fn is_positive(&self) -> bool {
        match self {
            Budget::Tier(_) => true,
            Budget::Amount(amount) => amount.is_finite() && *amount > 0.0,
        }
    }
}

impl From<BudgetTier> for Budget {
    fn from(tier: BudgetTier) -> Self {
        Budget::Tier(tier)
    }
}

impl From<f64> for Budget {
    fn from(amount: f64) -> Self {
        Budget::Amount(amount)
    }
}

impl FromStr for Budget {
    type Err = String;

    /// Parses a tier label (`low`, `medium`, `high`) or a numeric amount.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(tier) = trimmed.parse::<BudgetTier>() {
            return Ok(Budget::Tier(tier));
        }
        trimmed
            .parse::<f64>()
            .map(Budget::Amount)
            .map_err(|_| format!("Invalid budget: {s}. Must be {} or an amount", BudgetTier::choices()))
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Tier(tier) => write!(f, "{tier}"),
            Budget::Amount(amount) => write!(f, "${amount:.2}"),
        }
    }
}
