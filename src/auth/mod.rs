//! User authentication
//!
//! - [`Credential`]: Argon2id password hash
//! - [`UserProfile`]: identity, credential, owned account and portfolio
//! - [`AuthDirectory`]: keyed profile store with credential checks
//! - [`bootstrap`] / [`Roster`]: build a directory from predefined users

mod credential;
mod directory;
mod profile;
mod roster;

pub use credential::Credential;
pub use directory::AuthDirectory;
pub use profile::UserProfile;
pub use roster::{bootstrap, Roster, UserSeed};
