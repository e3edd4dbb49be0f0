//! Identifier types for fitdesk entities.
//!
//! All identifiers are opaque non-empty strings. Members carry random UUID
//! tokens, payment records carry time-ordered ULID tokens, and staff, plans
//! and feedback carry sequential identifiers of the form `"<Prefix><N>"`
//! (`S3`, `P1`, `F12`). Assignment happens in the storage layer on first
//! save; this crate only defines the wrappers.
//!
//! # Macro-based ID types
//!
//! The `string_id_type!` macro generates the newtype wrappers, ensuring a
//! consistent implementation of parsing, display and serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input was empty or whitespace-only.
    #[error("identifier must not be empty")]
    Empty,
}

/// Defines a string-backed identifier type with standard trait
/// implementations: `Display`, `FromStr` (rejecting blank input),
/// `TryFrom<String>`, `Into<String>`, `AsRef<str>`, and transparent serde.
macro_rules! string_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap an already-assigned identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(IdError::Empty);
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id_type!(
    MemberId,
    "A member identifier.\n\nMembers are issued a random UUID token by the member store on first save."
);
string_id_type!(
    StaffId,
    "A staff identifier of the form `S<N>`, allocated sequentially by the staff store."
);
string_id_type!(
    PlanId,
    "A membership-plan identifier of the form `P<N>`, allocated sequentially by the plan store."
);
string_id_type!(
    FeedbackId,
    "A feedback identifier of the form `F<N>`, allocated sequentially by the feedback store."
);
string_id_type!(
    PaymentId,
    "A payment-record identifier.\n\nPayment records are issued a time-ordered ULID token so that listings sort chronologically."
);
