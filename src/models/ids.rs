//! Strongly-typed ID wrappers for transactions and budgets
//!
//! IDs are plain strings on the wire so that seeded rows (`"1"`, `"2"`, ...)
//! and rows written by older builds load unchanged. Fresh IDs are random
//! UUIDs, which cannot collide the way clock-derived IDs can.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new random ID
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an existing identifier verbatim
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier text
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }
    };
}

define_id!(TransactionId);
define_id!(BudgetId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: std::collections::HashSet<_> =
            (0..1000).map(|_| TransactionId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generated_id_is_uuid() {
        let id = BudgetId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_legacy_ids_round_trip() {
        let id: TransactionId = serde_json::from_str("\"1704067200000\"").unwrap();
        assert_eq!(id.as_str(), "1704067200000");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1704067200000\"");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id: TransactionId = " 3 ".parse().unwrap();
        assert_eq!(id, TransactionId::from("3"));
        assert_eq!(id.to_string(), "3");
    }
}
