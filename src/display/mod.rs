//! Display formatting utilities
//!
//! Terminal renderings of dashboards, registers, budgets, portfolios and
//! the user directory.

pub mod account;
pub mod portfolio;
pub mod transaction;
pub mod user;

pub use account::{format_budget_table, format_dashboard};
pub use portfolio::{format_checkup, format_portfolio};
pub use transaction::{format_transaction_register, format_transaction_row};
pub use user::{format_profile, format_user_list};
