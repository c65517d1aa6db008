//! PocketLedger - personal finance ledger for the terminal
//!
//! A small set of predefined users, each owning one account with a
//! transaction ledger and category budgets, plus an investment portfolio
//! and a rough tax checkup. Budget threshold crossings and other events are
//! raised as notifications and handed to pluggable sinks.
//!
//! # Architecture
//!
//! - `models`: accounts, transactions, budgets, investments, notifications
//! - `notify`: notification sinks (console, journal, in-memory)
//! - `auth`: credentials, user profiles, the authentication directory
//! - `checkup`: tax estimate over a profile
//! - `config`: path resolution and user settings
//! - `display`: terminal formatting
//! - `cli`: login handling and the interactive shell
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use pocketledger::auth::{bootstrap, Roster};
//! use pocketledger::models::{Money, Notification};
//!
//! let roster = Roster::demo();
//! let mut directory = bootstrap(&roster.users)?;
//! let user = directory
//!     .authenticate(&1, "asha@pocketledger.dev", "Pass@123")
//!     .expect("demo user");
//!
//! let mut events: Vec<Notification> = Vec::new();
//! user.account_mut().add_income(Money::from_units(5000), "Salary", &mut events);
//! assert_eq!(user.account().balance(), Money::from_units(5000));
//! # Ok::<(), pocketledger::FinanceError>(())
//! ```

pub mod auth;
pub mod checkup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;

pub use error::FinanceError;
