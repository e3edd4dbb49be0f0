//! Payment tracking types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::{MemberId, PaymentId};

/// A payment owed by or received from a member.
///
/// Records are created in [`PaymentStatus::Pending`] when a payment is
/// initiated and only ever change status afterwards; there is no delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// The payment identifier; `None` until the store assigns one.
    pub id: Option<PaymentId>,

    /// The member the payment belongs to.
    pub member_id: MemberId,

    /// Amount due, taken from the member's plan price at initiation.
    pub amount: Decimal,

    /// Current payment status.
    pub status: PaymentStatus,

    /// When the payment was initiated.
    pub created_at: DateTime<Utc>,

    /// When the payment was settled; `None` while unpaid.
    pub paid_at: Option<DateTime<Utc>>,
}

/// The closed set of payment states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Initiated, awaiting settlement.
    Pending,
    /// Settled in full.
    Paid,
    /// Past due.
    Overdue,
}

impl PaymentStatus {
    /// The canonical textual name used in the persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Overdue => "OVERDUE",
        }
    }

    /// Whether a transition from `self` to `to` is allowed.
    ///
    /// Pending payments may be settled or fall overdue; overdue payments may
    /// still be settled. A settled payment never changes again.
    #[must_use]
    pub const fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Paid) | (Self::Pending, Self::Overdue) | (Self::Overdue, Self::Paid)
        )
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a payment status name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment status: {0:?}")]
pub struct InvalidPaymentStatus(pub String);

impl FromStr for PaymentStatus {
    type Err = InvalidPaymentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::Pending, Self::Paid, Self::Overdue]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidPaymentStatus(name.to_string()))
    }
}
