//! Caller identity for service operations.
//!
//! The presentation layer establishes who is calling (its own session
//! mechanism, out of scope here) and passes that identity into each service
//! call explicitly. Services gate privileged operations on
//! [`Actor::is_admin`] and ownership checks on [`Actor::is_member`].

use serde::{Deserialize, Serialize};

use crate::ids::{MemberId, StaffId};
use crate::staff::StaffRole;

/// The identity on whose behalf a service call runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// A logged-in member.
    Member(MemberId),

    /// A logged-in staff account.
    Staff {
        /// The staff identifier.
        id: StaffId,
        /// The staff member's role.
        role: StaffRole,
    },

    /// A trusted in-process caller, e.g. the startup bootstrap. Passes every
    /// permission check.
    System,
}

impl Actor {
    /// Build a staff actor from an authenticated staff record.
    #[must_use]
    pub fn staff(id: StaffId, role: StaffRole) -> Self {
        Self::Staff { id, role }
    }

    /// Whether this actor holds administrator privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        match self {
            Self::Staff { role, .. } => *role == StaffRole::Admin,
            Self::System => true,
            Self::Member(_) => false,
        }
    }

    /// Whether this actor is the member identified by `id`.
    #[must_use]
    pub fn is_member(&self, id: &MemberId) -> bool {
        matches!(self, Self::Member(own) if own == id)
    }
}
