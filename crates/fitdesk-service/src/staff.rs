//! Staff administration and login.

use std::sync::Arc;

use fitdesk_core::{Actor, NewStaff, Staff, StaffId, StaffRole, StaffUpdate};
use fitdesk_store::FlatFileStore;

use crate::access;
use crate::error::{Result, ServiceError};
use crate::input;
use crate::password;

/// Service for staff accounts.
#[derive(Clone)]
pub struct StaffService {
    staff: Arc<FlatFileStore<Staff>>,
}

impl StaffService {
    pub(crate) fn new(staff: Arc<FlatFileStore<Staff>>) -> Self {
        Self { staff }
    }

    /// List every staff account. Restricted to administrators.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers, or a
    /// storage error.
    pub fn list(&self, actor: &Actor) -> Result<Vec<Staff>> {
        access::require_admin(actor)?;
        Ok(self.staff.find_all()?)
    }

    /// Look up a staff account by identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the staff file cannot be read.
    pub fn staff_by_id(&self, id: &StaffId) -> Result<Option<Staff>> {
        Ok(self.staff.find_by_id(id.as_str())?)
    }

    /// Look up a staff account by email, trimmed and case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the staff file cannot be read.
    pub fn staff_by_email(&self, email: &str) -> Result<Option<Staff>> {
        let email = email.trim();
        if email.is_empty() {
            return Ok(None);
        }
        Ok(self
            .staff
            .find_all()?
            .into_iter()
            .find(|staff| staff.email.eq_ignore_ascii_case(email)))
    }

    /// Register a new staff account. Restricted to administrators.
    ///
    /// The email must be unused among staff, the password must meet the
    /// minimum length and is hashed before storage, and the role name is
    /// normalized from any casing into the closed role set.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers, the
    /// violated validation rule, or a storage error.
    pub fn register(&self, actor: &Actor, new: NewStaff) -> Result<Staff> {
        access::require_admin(actor)?;

        let email = input::required_trimmed("email", &new.email)?;
        if self.staff_by_email(&email)?.is_some() {
            return Err(ServiceError::EmailTaken { email });
        }
        let raw_password = password::require_min_len(&new.password)?;
        let role: StaffRole = input::required_trimmed("role", &new.role)?.parse()?;

        let staff = Staff {
            id: None,
            name: new.name.trim().to_string(),
            email,
            password_hash: password::hash_password(raw_password)?,
            role,
        };
        Ok(self.staff.save(staff)?)
    }

    /// Update a staff account. Restricted to administrators.
    ///
    /// Absent or blank fields keep their stored values; in particular a
    /// blank password preserves the stored hash. A new email must stay
    /// unique excluding the account itself.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers,
    /// [`ServiceError::StaffNotFound`] if the identifier is unknown, the
    /// violated validation rule, or a storage error.
    pub fn update(&self, actor: &Actor, id: &StaffId, update: StaffUpdate) -> Result<Staff> {
        access::require_admin(actor)?;
        let mut staff = self
            .staff
            .find_by_id(id.as_str())?
            .ok_or_else(|| ServiceError::staff_not_found(id))?;

        if let Some(email) = input::nonblank(update.email) {
            if let Some(other) = self.staff_by_email(&email)? {
                if other.id.as_ref() != Some(id) {
                    return Err(ServiceError::EmailTaken { email });
                }
            }
            staff.email = email;
        }
        if let Some(name) = input::nonblank(update.name) {
            staff.name = name;
        }
        if let Some(role) = input::nonblank(update.role) {
            staff.role = role.parse()?;
        }
        if let Some(raw) = input::nonblank(update.password) {
            let raw = password::require_min_len(&raw)?;
            staff.password_hash = password::hash_password(raw)?;
        }

        Ok(self.staff.save(staff)?)
    }

    /// Delete a staff account. Restricted to administrators.
    ///
    /// The last remaining administrator can never be deleted. Returns
    /// whether an account was removed; an unknown identifier is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers,
    /// [`ServiceError::LastAdmin`] when the target is the only
    /// administrator, or a storage error.
    pub fn delete(&self, actor: &Actor, id: &StaffId) -> Result<bool> {
        access::require_admin(actor)?;
        let Some(target) = self.staff.find_by_id(id.as_str())? else {
            return Ok(false);
        };

        if target.is_admin() {
            let admins = self.staff.find_where(Staff::is_admin)?.len();
            if admins <= 1 {
                return Err(ServiceError::LastAdmin);
            }
        }

        Ok(self.staff.delete_by_id(id.as_str())?)
    }

    /// Authenticate a staff account by email and password.
    ///
    /// An unknown email and a wrong password are indistinguishable: both
    /// come back as `None`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the staff file cannot be read.
    pub fn login(&self, email: &str, raw_password: &str) -> Result<Option<Staff>> {
        let Some(staff) = self.staff_by_email(email)? else {
            return Ok(None);
        };
        if password::verify_password(raw_password, &staff.password_hash) {
            Ok(Some(staff))
        } else {
            Ok(None)
        }
    }
}
