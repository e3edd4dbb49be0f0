//! Membership-plan catalog management.

use std::sync::Arc;

use rust_decimal::Decimal;

use fitdesk_core::{Actor, Member, MembershipPlan, NewPlan, PlanId};
use fitdesk_store::FlatFileStore;

use crate::access;
use crate::error::{Result, ServiceError};
use crate::input;

/// Service for the membership-plan catalog.
#[derive(Clone)]
pub struct PlanService {
    plans: Arc<FlatFileStore<MembershipPlan>>,
    members: Arc<FlatFileStore<Member>>,
}

impl PlanService {
    pub(crate) fn new(
        plans: Arc<FlatFileStore<MembershipPlan>>,
        members: Arc<FlatFileStore<Member>>,
    ) -> Self {
        Self { plans, members }
    }

    /// List the catalog.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the plan file cannot be read.
    pub fn list(&self) -> Result<Vec<MembershipPlan>> {
        Ok(self.plans.find_all()?)
    }

    /// Look up a plan by identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the plan file cannot be read.
    pub fn plan_by_id(&self, id: &PlanId) -> Result<Option<MembershipPlan>> {
        Ok(self.plans.find_by_id(id.as_str())?)
    }

    /// Add a plan to the catalog. Restricted to administrators.
    ///
    /// The price must not be negative, the duration must be at least one
    /// month and the name must be unused (case-insensitive). The store
    /// assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers, the
    /// violated validation rule, or a storage error.
    pub fn add(&self, actor: &Actor, new: NewPlan) -> Result<MembershipPlan> {
        access::require_admin(actor)?;
        let name = self.validate(&new, None)?;

        let plan = MembershipPlan {
            id: None,
            name,
            description: new.description.trim().to_string(),
            duration_months: new.duration_months,
            price: new.price,
        };
        Ok(self.plans.save(plan)?)
    }

    /// Replace a plan's contents. Restricted to administrators.
    ///
    /// The same checks as [`PlanService::add`] apply, with the plan itself
    /// excluded from the name-uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers,
    /// [`ServiceError::PlanNotFound`] if the identifier is unknown, the
    /// violated validation rule, or a storage error.
    pub fn update(&self, actor: &Actor, id: &PlanId, new: NewPlan) -> Result<MembershipPlan> {
        access::require_admin(actor)?;
        if self.plans.find_by_id(id.as_str())?.is_none() {
            return Err(ServiceError::plan_not_found(id));
        }
        let name = self.validate(&new, Some(id))?;

        let plan = MembershipPlan {
            id: Some(id.clone()),
            name,
            description: new.description.trim().to_string(),
            duration_months: new.duration_months,
            price: new.price,
        };
        Ok(self.plans.save(plan)?)
    }

    /// Delete a plan. Restricted to administrators.
    ///
    /// A plan still referenced by members cannot be deleted. Returns
    /// whether a plan was removed; an unknown identifier is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers,
    /// [`ServiceError::PlanInUse`] while members reference the plan, or a
    /// storage error.
    pub fn delete(&self, actor: &Actor, id: &PlanId) -> Result<bool> {
        access::require_admin(actor)?;
        if self.plans.find_by_id(id.as_str())?.is_none() {
            return Ok(false);
        }

        let referencing = self
            .members
            .find_where(|member| member.plan_id.as_ref() == Some(id))?
            .len();
        if referencing > 0 {
            return Err(ServiceError::PlanInUse {
                id: id.to_string(),
                members: referencing,
            });
        }

        Ok(self.plans.delete_by_id(id.as_str())?)
    }

    /// Run the catalog rules, returning the trimmed plan name.
    fn validate(&self, new: &NewPlan, exclude: Option<&PlanId>) -> Result<String> {
        let name = input::required_trimmed("name", &new.name)?;
        if new.price < Decimal::ZERO {
            return Err(ServiceError::NegativePrice);
        }
        if new.duration_months == 0 {
            return Err(ServiceError::InvalidDuration);
        }

        let duplicate = self.plans.find_all()?.into_iter().any(|plan| {
            plan.name.eq_ignore_ascii_case(&name)
                && exclude.map_or(true, |keep| plan.id.as_ref() != Some(keep))
        });
        if duplicate {
            return Err(ServiceError::DuplicatePlanName { name });
        }

        Ok(name)
    }
}
