//! Notification model
//!
//! A notification is an immutable event value. Components build one and hand
//! it to a [`NotificationSink`](crate::notify::NotificationSink); nothing in
//! the ledger keeps it afterwards.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;

/// Base ids for each kind of event
pub mod codes {
    /// Added to the budget id for "budget exceeded"
    pub const BUDGET_EXCEEDED: u32 = 100;
    /// Added to the budget id for "budget reaching limit"
    pub const BUDGET_NEAR_LIMIT: u32 = 200;
    /// Added to the budget id for "budget adjusted"
    pub const BUDGET_ADJUSTED: u32 = 300;
    pub const TAX_TIP: u32 = 400;
    pub const INCOME_ADDED: u32 = 500;
    pub const PROFILE_UPDATED: u32 = 600;
    pub const INVESTMENT_ADDED: u32 = 700;
}

/// A single fire-and-forget event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub date: NaiveDate,
}

impl Notification {
    /// Create a notification stamped with today's local date
    pub fn new(id: u32, message: impl Into<String>) -> Self {
        Self::on(id, message, Local::now().date_naive())
    }

    /// Create a notification with an explicit date
    pub fn on(id: u32, message: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            message: message.into(),
            date,
        }
    }

    /// Id for a budget-scoped event
    pub fn budget_code(base: u32, budget: BudgetId) -> u32 {
        base + budget.get()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.date.format("%Y-%m-%d"), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_date_and_message() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let n = Notification::on(500, "Income added: 10.00", date);
        assert_eq!(n.to_string(), "[2025-03-09] Income added: 10.00");
    }

    #[test]
    fn test_budget_code() {
        assert_eq!(
            Notification::budget_code(codes::BUDGET_EXCEEDED, BudgetId::new(2)),
            102
        );
        assert_eq!(
            Notification::budget_code(codes::BUDGET_ADJUSTED, BudgetId::new(1)),
            301
        );
    }

    #[test]
    fn test_new_uses_today() {
        let n = Notification::new(600, "Profile updated successfully!");
        let today = Local::now().date_naive();
        assert!(n.date == today || n.date.succ_opt() == Some(today));
    }
}
