//! User profile
//!
//! A profile owns exactly one account for its whole lifetime, along with
//! the user's identity, credential and investment portfolio.

use std::fmt;

use super::credential::Credential;
use crate::models::notification::codes;
use crate::models::{Account, Investment, InvestmentId, Money, Notification, RiskLevel};
use crate::notify::NotificationSink;

/// A registered user, keyed by `K` in the directory
#[derive(Debug, Clone)]
pub struct UserProfile<K> {
    id: K,
    name: String,
    email: String,
    credential: Credential,
    account: Account,
    investments: Vec<Investment>,
}

impl<K> UserProfile<K> {
    /// Build a profile around an account; the account cannot be swapped later
    pub fn new(
        id: K,
        name: impl Into<String>,
        email: impl Into<String>,
        credential: Credential,
        account: Account,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            credential,
            account,
            investments: Vec::new(),
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    /// Whether the email and password both match exactly
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.credential.verify(password)
    }

    /// Overwrite name and email
    ///
    /// No uniqueness check is made against other profiles.
    pub fn update_profile<S: NotificationSink + ?Sized>(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        sink: &mut S,
    ) {
        self.name = name.into();
        self.email = email.into();
        sink.deliver(&Notification::new(
            codes::PROFILE_UPDATED,
            "Profile updated successfully!",
        ));
    }

    /// Record a portfolio entry
    pub fn add_investment<S: NotificationSink + ?Sized>(
        &mut self,
        kind: impl Into<String>,
        amount: Money,
        expected_return: f64,
        risk: RiskLevel,
        sink: &mut S,
    ) -> InvestmentId {
        let id = InvestmentId::next_after(self.investments.len());
        let investment = Investment::new(id, kind, amount, expected_return, risk);
        sink.deliver(&Notification::new(
            codes::INVESTMENT_ADDED,
            format!("New investment added: {}", investment.kind),
        ));
        self.investments.push(investment);
        id
    }
}

impl<K: fmt::Display> fmt::Display for UserProfile<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> (id {})", self.name, self.email, self.id)
    }
}
