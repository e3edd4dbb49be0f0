//! Staff types and roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::StaffId;

/// A staff account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// The staff identifier; `None` until the store assigns one.
    pub id: Option<StaffId>,

    /// Display name.
    pub name: String,

    /// Contact email, unique among staff (case-insensitive).
    pub email: String,

    /// Salted argon2 hash of the staff member's password.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// The staff member's role.
    pub role: StaffRole,
}

impl Staff {
    /// Whether this staff member holds the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == StaffRole::Admin
    }
}

/// The closed set of staff roles.
///
/// Roles persist under their canonical upper-case names (`ADMIN`,
/// `FRONT_DESK`, `TRAINER`); parsing accepts any casing and rejects
/// everything outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    /// Full administrative access; at least one admin must always remain.
    Admin,
    /// Front-desk operations.
    FrontDesk,
    /// Training staff.
    Trainer,
}

impl StaffRole {
    /// The canonical textual name used in the persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::FrontDesk => "FRONT_DESK",
            Self::Trainer => "TRAINER",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a staff role name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown staff role: {0:?}")]
pub struct InvalidStaffRole(pub String);

impl FromStr for StaffRole {
    type Err = InvalidStaffRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::Admin, Self::FrontDesk, Self::Trainer]
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidStaffRole(name.to_string()))
    }
}

/// Payload for registering a new staff account.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStaff {
    /// Display name.
    pub name: String,
    /// Contact email; must be unused among staff.
    pub email: String,
    /// Raw password; hashed by the service before storage.
    pub password: String,
    /// Role name in any casing, e.g. `"admin"` or `"FRONT_DESK"`.
    pub role: String,
}

/// Payload for updating a staff account.
///
/// Absent or blank fields preserve the stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email; must stay unique excluding the account itself.
    pub email: Option<String>,
    /// New raw password; length-checked and re-hashed when present.
    pub password: Option<String>,
    /// New role name in any casing.
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_any_casing() {
        assert_eq!("admin".parse::<StaffRole>().unwrap(), StaffRole::Admin);
        assert_eq!(
            "front_desk".parse::<StaffRole>().unwrap(),
            StaffRole::FrontDesk
        );
        assert_eq!(" TRAINER ".parse::<StaffRole>().unwrap(), StaffRole::Trainer);
    }

    #[test]
    fn role_rejects_unknown_names() {
        let err = "janitor".parse::<StaffRole>().unwrap_err();
        assert_eq!(err, InvalidStaffRole("janitor".to_string()));
    }

    #[test]
    fn role_display_roundtrip() {
        for role in [StaffRole::Admin, StaffRole::FrontDesk, StaffRole::Trainer] {
            assert_eq!(role.to_string().parse::<StaffRole>().unwrap(), role);
        }
    }

    #[test]
    fn role_serde_uses_canonical_names() {
        let json = serde_json::to_string(&StaffRole::FrontDesk).unwrap();
        assert_eq!(json, "\"FRONT_DESK\"");
    }
}
