//! Investment model
//!
//! Portfolio entries held on a user profile. They are recorded for display
//! and the tax checkup; they never touch the account ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InvestmentId;
use super::money::Money;

/// Risk band declared for an investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    /// Parse a risk level from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Some(Self::Low),
            "medium" | "med" | "m" => Some(Self::Medium),
            "high" | "h" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// One portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,
    /// Instrument type as entered, e.g. "FD", "Stocks", "PPF"
    pub kind: String,
    pub amount: Money,
    /// Expected annual return, in percent
    pub expected_return: f64,
    pub risk: RiskLevel,
}

/// Instrument types that qualify for the tax-saving deduction
pub const TAX_SAVING_KINDS: [&str; 2] = ["PPF", "ELSS"];

impl Investment {
    pub fn new(
        id: InvestmentId,
        kind: impl Into<String>,
        amount: Money,
        expected_return: f64,
        risk: RiskLevel,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            amount,
            expected_return,
            risk,
        }
    }

    /// Whether this instrument counts toward the tax-saving deduction
    ///
    /// Matching is exact, so "ppf" does not qualify.
    pub fn is_tax_saving(&self) -> bool {
        TAX_SAVING_KINDS.contains(&self.kind.as_str())
    }
}

impl fmt::Display for Investment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Investment #{}: {} {} ({}% expected, {} risk)",
            self.id.get(),
            self.kind,
            self.amount,
            self.expected_return,
            self.risk
        )
    }
}
