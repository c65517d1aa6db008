//! Strongly-typed ID wrappers for ledger entities
//!
//! Ledger ids are small sequential integers assigned by their owner
//! (an account numbers its own transactions and budgets starting at 1).
//! Newtypes keep a budget id from being passed where a transaction id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw id
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// The id that follows a collection of `len` entries (1-based)
            pub fn next_after(len: usize) -> Self {
                Self(u32::try_from(len).unwrap_or(u32::MAX - 1) + 1)
            }

            /// Get the raw value
            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(TransactionId, "txn-");
define_id!(BudgetId, "bud-");
define_id!(InvestmentId, "inv-");
