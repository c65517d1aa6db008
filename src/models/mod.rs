//! Core data models for pocketledger
//!
//! Accounts with their transaction ledger and category budgets, investment
//! portfolio entries, and the notifications those operations raise.

pub mod account;
pub mod budget;
pub mod ids;
pub mod investment;
pub mod money;
pub mod notification;
pub mod transaction;

pub use account::{Account, Dashboard, RECENT_TRANSACTIONS};
pub use budget::{Budget, BudgetStatus};
pub use ids::{AccountId, BudgetId, InvestmentId, TransactionId};
pub use investment::{Investment, RiskLevel};
pub use money::{Money, MoneyParseError};
pub use notification::Notification;
pub use transaction::{Transaction, TransactionKind};
