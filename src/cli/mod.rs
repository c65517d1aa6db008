//! Command-line surface
//!
//! Login handling, the interactive menu shell, and the non-interactive
//! subcommands.

pub mod commands;
pub mod login;
pub mod session;

pub use commands::{config_report, journal_report, users_report, Commands};
pub use login::{resolve_login, LoginArgs, LoginRequest};
pub use session::{MenuChoice, Session};
