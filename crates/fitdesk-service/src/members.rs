//! Member registration, profile management and login.

use std::sync::Arc;

use fitdesk_core::{Actor, Member, MemberId, MemberUpdate, MembershipPlan, NewMember, PlanId};
use fitdesk_store::FlatFileStore;

use crate::access;
use crate::error::{Result, ServiceError};
use crate::input;
use crate::password;

/// Service for member accounts.
#[derive(Clone)]
pub struct MemberService {
    members: Arc<FlatFileStore<Member>>,
    plans: Arc<FlatFileStore<MembershipPlan>>,
}

impl MemberService {
    pub(crate) fn new(
        members: Arc<FlatFileStore<Member>>,
        plans: Arc<FlatFileStore<MembershipPlan>>,
    ) -> Self {
        Self { members, plans }
    }

    /// List every member. Restricted to administrators.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers, or a
    /// storage error.
    pub fn list(&self, actor: &Actor) -> Result<Vec<Member>> {
        access::require_admin(actor)?;
        Ok(self.members.find_all()?)
    }

    /// Look up a member by identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the member file cannot be read.
    pub fn member_by_id(&self, id: &MemberId) -> Result<Option<Member>> {
        Ok(self.members.find_by_id(id.as_str())?)
    }

    /// Look up a member by email, trimmed and case-insensitive. Blank input
    /// matches nothing.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the member file cannot be read.
    pub fn member_by_email(&self, email: &str) -> Result<Option<Member>> {
        let email = email.trim();
        if email.is_empty() {
            return Ok(None);
        }
        Ok(self
            .members
            .find_all()?
            .into_iter()
            .find(|member| member.email.eq_ignore_ascii_case(email)))
    }

    /// Register a new member.
    ///
    /// The email must be unused among members (case-insensitive), the
    /// password must meet the minimum length and is hashed before storage,
    /// and a referenced plan must exist. The store assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns the violated validation rule, or a storage error.
    pub fn register(&self, new: NewMember) -> Result<Member> {
        let email = input::required_trimmed("email", &new.email)?;
        if self.member_by_email(&email)?.is_some() {
            return Err(ServiceError::EmailTaken { email });
        }
        let raw_password = password::require_min_len(&new.password)?;
        if let Some(plan_id) = &new.plan_id {
            self.require_plan(plan_id)?;
        }

        let member = Member {
            id: None,
            name: new.name.trim().to_string(),
            email,
            password_hash: password::hash_password(raw_password)?,
            phone: new.phone.trim().to_string(),
            plan_id: new.plan_id,
        };
        Ok(self.members.save(member)?)
    }

    /// Update a member's profile. Members may update themselves; admins may
    /// update anyone.
    ///
    /// Absent or blank fields keep their stored values. A new email must
    /// stay unique excluding the member itself; a new password is
    /// length-checked and re-hashed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AccessDenied`] for other callers,
    /// [`ServiceError::MemberNotFound`] if the identifier is unknown, the
    /// violated validation rule, or a storage error.
    pub fn update(&self, actor: &Actor, id: &MemberId, update: MemberUpdate) -> Result<Member> {
        access::require_self_or_admin(actor, id)?;
        let mut member = self
            .members
            .find_by_id(id.as_str())?
            .ok_or_else(|| ServiceError::member_not_found(id))?;

        if let Some(email) = input::nonblank(update.email) {
            if let Some(other) = self.member_by_email(&email)? {
                if other.id.as_ref() != Some(id) {
                    return Err(ServiceError::EmailTaken { email });
                }
            }
            member.email = email;
        }
        if let Some(name) = input::nonblank(update.name) {
            member.name = name;
        }
        if let Some(phone) = input::nonblank(update.phone) {
            member.phone = phone;
        }
        if let Some(plan_id) = update.plan_id {
            self.require_plan(&plan_id)?;
            member.plan_id = Some(plan_id);
        }
        if let Some(raw) = input::nonblank(update.password) {
            let raw = password::require_min_len(&raw)?;
            member.password_hash = password::hash_password(raw)?;
        }

        Ok(self.members.save(member)?)
    }

    /// Delete a member. Restricted to administrators.
    ///
    /// Returns whether a member was removed; an unknown identifier is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers, or a
    /// storage error.
    pub fn delete(&self, actor: &Actor, id: &MemberId) -> Result<bool> {
        access::require_admin(actor)?;
        if self.members.find_by_id(id.as_str())?.is_none() {
            return Ok(false);
        }
        Ok(self.members.delete_by_id(id.as_str())?)
    }

    /// Authenticate a member by email and password.
    ///
    /// An unknown email and a wrong password are indistinguishable: both
    /// come back as `None`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the member file cannot be read.
    pub fn login(&self, email: &str, raw_password: &str) -> Result<Option<Member>> {
        let Some(member) = self.member_by_email(email)? else {
            return Ok(None);
        };
        if password::verify_password(raw_password, &member.password_hash) {
            Ok(Some(member))
        } else {
            Ok(None)
        }
    }

    fn require_plan(&self, id: &PlanId) -> Result<()> {
        if self.plans.find_by_id(id.as_str())?.is_none() {
            return Err(ServiceError::plan_not_found(id));
        }
        Ok(())
    }
}
