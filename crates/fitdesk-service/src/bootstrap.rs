//! Startup administrator seeding.

use fitdesk_core::{Actor, NewStaff, Staff, StaffRole};

use crate::config::{AdminSeed, DEFAULT_ADMIN_PASSWORD};
use crate::error::Result;
use crate::staff::StaffService;

/// Ensure at least one administrator account exists.
///
/// When no staff record carries the `ADMIN` role and the seed email is
/// free, the seed account is registered through the normal staff validation
/// path, so the password ends up hashed like any other. When an admin
/// already exists, or a non-admin account occupies the seed email, nothing
/// is created.
///
/// Returns the created account, or `None` when nothing needed seeding.
///
/// # Errors
///
/// Returns the staff service's validation error if the seed credentials are
/// unusable (e.g. a too-short password), or a storage error.
pub fn ensure_admin(staff: &StaffService, seed: &AdminSeed) -> Result<Option<Staff>> {
    let existing = staff.list(&Actor::System)?;
    if existing.iter().any(Staff::is_admin) {
        tracing::info!("administrator already present, skipping bootstrap");
        return Ok(None);
    }

    if staff.staff_by_email(&seed.email)?.is_some() {
        tracing::warn!(
            email = %seed.email,
            "bootstrap email is taken by a non-admin account, skipping seed"
        );
        return Ok(None);
    }

    if seed.password == DEFAULT_ADMIN_PASSWORD {
        tracing::warn!("seeding administrator with the default password, change it after first login");
    }

    let admin = staff.register(
        &Actor::System,
        NewStaff {
            name: seed.name.clone(),
            email: seed.email.clone(),
            password: seed.password.clone(),
            role: StaffRole::Admin.to_string(),
        },
    )?;
    tracing::info!(email = %admin.email, id = ?admin.id, "created bootstrap administrator");
    Ok(Some(admin))
}
