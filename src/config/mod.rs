//! Configuration module for pocketledger
//!
//! - Path resolution for the config directory and its files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
