//! Password credentials using Argon2id
//!
//! Passwords are never kept in clear text once a profile is built; the
//! profile stores a PHC-format hash and verifies login attempts against it.
//! Verification is an exact, case-sensitive comparison of the password.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::fmt;

use crate::error::{FinanceError, FinanceResult};

/// Memory cost in KiB
const MEMORY_COST: u32 = 8 * 1024;
/// Iterations
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

/// A hashed password
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    phc: String,
}

impl Credential {
    /// Hash a password with a fresh random salt
    pub fn from_password(password: &str) -> FinanceResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| FinanceError::Credential(format!("Password hashing failed: {}", e)))?
            .to_string();
        Ok(Self { phc })
    }

    /// Check a login attempt
    pub fn verify(&self, password: &str) -> bool {
        let parsed = match PasswordHash::new(&self.phc) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash is unreadable");
                return false;
            }
        };
        // cost parameters are read back from the hash itself
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

fn hasher() -> FinanceResult<Argon2<'static>> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, None)
        .map_err(|e| FinanceError::Credential(format!("Invalid Argon2 parameters: {}", e)))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_exact_password() {
        let cred = Credential::from_password("Pass@123").unwrap();
        assert!(cred.verify("Pass@123"));
        assert!(!cred.verify("pass@123"));
        assert!(!cred.verify("Pass@1234"));
        assert!(!cred.verify(""));
    }

    #[test]
    fn test_hash_is_salted() {
        let a = Credential::from_password("same").unwrap();
        let b = Credential::from_password("same").unwrap();
        assert_ne!(a.phc, b.phc);
        assert!(a.phc.starts_with("$argon2id$"));
    }

    #[test]
    fn test_unreadable_hash_never_verifies() {
        let broken = Credential {
            phc: "not a hash".to_string(),
        };
        assert!(!broken.verify("not a hash"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::from_password("secret").unwrap();
        assert_eq!(format!("{:?}", cred), "Credential(<redacted>)");
    }
}
