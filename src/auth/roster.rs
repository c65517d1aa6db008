//! Directory bootstrap
//!
//! Turns a roster of identity/credential seeds into a populated
//! [`AuthDirectory`]. Each seed gets a fresh, empty account whose id is the
//! user id.

use serde::{Deserialize, Serialize};
use std::path::Path;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::credential::Credential;
use super::directory::AuthDirectory;
use super::profile::UserProfile;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Account, AccountId};

/// One predefined user; the password is wiped from memory on drop
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct UserSeed {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserSeed {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for UserSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSeed")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// A list of seeds, as stored in a roster file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub users: Vec<UserSeed>,
}

impl Roster {
    /// Built-in roster used when no roster file is configured
    pub fn demo() -> Self {
        Self {
            users: vec![
                UserSeed::new(1, "Asha Demo", "asha@pocketledger.dev", "Pass@123"),
                UserSeed::new(2, "Ravi Demo", "ravi@pocketledger.dev", "Pass@23"),
                UserSeed::new(3, "Meera Demo", "meera@pocketledger.dev", "Pass@123"),
            ],
        }
    }

    /// Load a roster from a JSON or YAML file, chosen by extension
    pub fn load(path: &Path) -> FinanceResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FinanceError::Roster(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let roster: Roster = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            Some("json") | None => serde_json::from_str(&contents)?,
            Some(other) => {
                return Err(FinanceError::Roster(format!(
                    "Unsupported roster format '.{}' (expected .json, .yaml or .yml)",
                    other
                )))
            }
        };

        if roster.users.is_empty() {
            return Err(FinanceError::Roster(format!(
                "{} does not define any users",
                path.display()
            )));
        }

        Ok(roster)
    }
}

/// Build a directory from seeds, in order
///
/// Seeds reusing an id are skipped; the first seed for an id is kept.
pub fn bootstrap<'a, I>(seeds: I) -> FinanceResult<AuthDirectory<u32>>
where
    I: IntoIterator<Item = &'a UserSeed>,
{
    let mut directory = AuthDirectory::new();

    for seed in seeds {
        let credential = Credential::from_password(&seed.password)?;
        let profile = UserProfile::new(
            seed.id,
            seed.name.clone(),
            seed.email.clone(),
            credential,
            Account::new(AccountId::new(seed.id)),
        );
        directory.add_user(profile);
    }

    tracing::info!(users = directory.len(), "directory bootstrapped");
    Ok(directory)
}
