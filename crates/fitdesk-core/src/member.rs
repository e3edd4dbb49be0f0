//! Member types.

use serde::{Deserialize, Serialize};

use crate::ids::{MemberId, PlanId};

/// A registered gym member.
///
/// `password_hash` holds an argon2 PHC string, never the raw password; the
/// service layer hashes on registration and verifies on login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// The member identifier; `None` until the store assigns one.
    pub id: Option<MemberId>,

    /// Display name.
    pub name: String,

    /// Contact email, unique among members (case-insensitive).
    pub email: String,

    /// Salted argon2 hash of the member's password.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Contact phone number.
    pub phone: String,

    /// The membership plan the member is subscribed to, if any.
    pub plan_id: Option<PlanId>,
}

/// Payload for registering a new member.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMember {
    /// Display name.
    pub name: String,
    /// Contact email; must be unused among members.
    pub email: String,
    /// Raw password; hashed by the service before storage.
    pub password: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional membership plan; must reference an existing plan.
    pub plan_id: Option<PlanId>,
}

/// Payload for updating a member.
///
/// Absent or blank fields preserve the stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email; must stay unique excluding the member itself.
    pub email: Option<String>,
    /// New raw password; length-checked and re-hashed when present.
    pub password: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New membership plan.
    pub plan_id: Option<PlanId>,
}
