//! Strongly-typed identifiers for domain entities
//!
//! Identities are sequential integers handed out by the store, so the
//! newtypes wrap an `i64` rather than a random token. The wrappers prevent
//! accidental mixing of different identifier types; `0` is the unassigned
//! sentinel an entity carries before insertion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Sentinel for an entity that has not been inserted yet
            pub const UNASSIGNED: Self = Self(0);

            /// Wraps an existing identity value
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying integer value
            pub fn value(&self) -> i64 {
                self.0
            }

            /// Whether the store has assigned this identity
            pub fn is_assigned(&self) -> bool {
                self.0 > 0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::UNASSIGNED
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let value = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(value.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(ClaimId, "CLM");
define_id!(LecturerId, "LEC");
