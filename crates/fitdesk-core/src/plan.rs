//! Membership plan types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::PlanId;

/// A membership plan offered in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipPlan {
    /// The plan identifier; `None` until the store assigns one.
    pub id: Option<PlanId>,

    /// Plan name, unique in the catalog (case-insensitive).
    pub name: String,

    /// Free-text description shown to members.
    pub description: String,

    /// Plan duration in months; always at least one.
    pub duration_months: u32,

    /// Monthly price; never negative.
    pub price: Decimal,
}

/// Payload for adding or replacing a plan in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlan {
    /// Plan name; must be unused in the catalog.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Duration in months; must be at least one.
    pub duration_months: u32,
    /// Monthly price; must not be negative.
    pub price: Decimal,
}
