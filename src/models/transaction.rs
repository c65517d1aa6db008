//! Transaction model
//!
//! One immutable ledger movement. Amounts are stored as entered; the kind
//! decides whether the movement raises or lowers the balance.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded ledger movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential within the owning account, starting at 1
    pub id: TransactionId,
    pub amount: Money,
    pub category: String,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a transaction dated today
    pub fn new(
        id: TransactionId,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            kind,
            date: Local::now().date_naive(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Effect of this transaction on the account balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction #{} [{}] {} {} ({})",
            self.id.get(),
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_amount() {
        let income = Transaction::new(
            TransactionId::new(1),
            Money::from_units(40),
            "Salary",
            TransactionKind::Income,
        );
        let expense = Transaction::new(
            TransactionId::new(2),
            Money::from_units(15),
            "Food",
            TransactionKind::Expense,
        );

        assert!(income.is_income());
        assert!(expense.is_expense());
        assert_eq!(income.signed_amount().cents(), 4000);
        assert_eq!(expense.signed_amount().cents(), -1500);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }
}
