//! Budget model
//!
//! A per-category spending cap. Every tracked expense re-evaluates the
//! cap from scratch; there is no stored alert state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::notification::{codes, Notification};
use crate::notify::NotificationSink;

/// Outcome of evaluating a budget against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Below 75% of the limit
    WithinLimit,
    /// At or above 75% of the limit but not over it
    NearLimit {
        /// `floor(spent / limit * 100)`, 0 when the limit is zero
        percent: i64,
    },
    /// Strictly over the limit
    Exceeded,
}

/// A spending cap for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,
    pub category: String,
    pub limit: Money,
    /// Sum of all amounts tracked so far
    pub spent: Money,
}

impl Budget {
    /// Create a budget with nothing spent
    pub fn new(id: BudgetId, limit: Money, category: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
            limit,
            spent: Money::zero(),
        }
    }

    /// Evaluate the current spend against the limit without mutating
    pub fn status(&self) -> BudgetStatus {
        if self.spent > self.limit {
            BudgetStatus::Exceeded
        } else if self.spent.cents() as i128 * 4 >= self.limit.cents() as i128 * 3 {
            // spent >= 0.75 * limit, exact in minor units
            BudgetStatus::NearLimit {
                percent: self.spent.percent_of(self.limit).unwrap_or(0),
            }
        } else {
            BudgetStatus::WithinLimit
        }
    }

    /// Add an expense to the running total and raise at most one alert
    pub fn track_expense<S: NotificationSink + ?Sized>(
        &mut self,
        amount: Money,
        sink: &mut S,
    ) -> BudgetStatus {
        self.spent += amount;
        let status = self.status();

        match status {
            BudgetStatus::Exceeded => {
                tracing::debug!(budget = %self.id, category = %self.category, spent = %self.spent, "budget exceeded");
                sink.deliver(&Notification::new(
                    Notification::budget_code(codes::BUDGET_EXCEEDED, self.id),
                    format!("Budget exceeded for {}!", self.category),
                ));
            }
            BudgetStatus::NearLimit { percent } => {
                tracing::debug!(budget = %self.id, category = %self.category, percent, "budget near limit");
                sink.deliver(&Notification::new(
                    Notification::budget_code(codes::BUDGET_NEAR_LIMIT, self.id),
                    format!("Budget {} reaching limit ({}%)", self.category, percent),
                ));
            }
            BudgetStatus::WithinLimit => {}
        }

        status
    }

    /// Replace the limit; the running total is left untouched and not
    /// re-evaluated
    pub fn adjust<S: NotificationSink + ?Sized>(&mut self, new_limit: Money, sink: &mut S) {
        self.limit = new_limit;
        tracing::debug!(budget = %self.id, category = %self.category, limit = %new_limit, "budget adjusted");
        sink.deliver(&Notification::new(
            Notification::budget_code(codes::BUDGET_ADJUSTED, self.id),
            format!("Budget adjusted for {} to {}", self.category, new_limit),
        ));
    }

    /// Limit minus spend; negative once overspent
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: spent {} of {} (remaining {})",
            self.category,
            self.spent,
            self.limit,
            self.remaining()
        )
    }
}
