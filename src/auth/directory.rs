//! Authentication directory
//!
//! Keyed store of user profiles. Entries are added once at startup and
//! never removed.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use super::profile::UserProfile;

/// Maps a user key to its profile
#[derive(Debug, Clone)]
pub struct AuthDirectory<K: Ord> {
    users: BTreeMap<K, UserProfile<K>>,
}

impl<K: Ord> Default for AuthDirectory<K> {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone + fmt::Display> AuthDirectory<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile under its own id
    ///
    /// The first profile registered for a key wins: a later profile with
    /// the same key is dropped and `false` is returned.
    pub fn add_user(&mut self, profile: UserProfile<K>) -> bool {
        match self.users.entry(profile.id().clone()) {
            Entry::Occupied(existing) => {
                tracing::warn!(user = %existing.key(), "duplicate user id ignored");
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(profile);
                true
            }
        }
    }

    /// Look up a profile and check its credentials
    ///
    /// Returns a live handle on success. An unknown id and a wrong email or
    /// password produce the same `None`.
    pub fn authenticate(
        &mut self,
        id: &K,
        email: &str,
        password: &str,
    ) -> Option<&mut UserProfile<K>> {
        match self.users.get_mut(id) {
            Some(profile) if profile.matches(email, password) => {
                tracing::info!(user = %id, "authentication succeeded");
                Some(profile)
            }
            _ => {
                tracing::info!(user = %id, "authentication failed");
                None
            }
        }
    }

    pub fn get(&self, id: &K) -> Option<&UserProfile<K>> {
        self.users.get(id)
    }

    /// All profiles in key order
    pub fn users(&self) -> impl Iterator<Item = &UserProfile<K>> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
