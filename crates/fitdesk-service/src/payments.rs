//! Payment initiation and status tracking.

use std::sync::Arc;

use chrono::Utc;

use fitdesk_core::{
    Actor, Member, MemberId, MembershipPlan, PaymentId, PaymentRecord, PaymentStatus,
};
use fitdesk_store::FlatFileStore;

use crate::access;
use crate::error::{Result, ServiceError};

/// Service for payment records.
///
/// Payments are initiated as `PENDING` for the member's current plan price
/// and only ever change status afterwards; records are never deleted.
#[derive(Clone)]
pub struct PaymentService {
    payments: Arc<FlatFileStore<PaymentRecord>>,
    members: Arc<FlatFileStore<Member>>,
    plans: Arc<FlatFileStore<MembershipPlan>>,
}

impl PaymentService {
    pub(crate) fn new(
        payments: Arc<FlatFileStore<PaymentRecord>>,
        members: Arc<FlatFileStore<Member>>,
        plans: Arc<FlatFileStore<MembershipPlan>>,
    ) -> Self {
        Self {
            payments,
            members,
            plans,
        }
    }

    /// Initiate a payment for a member's current plan. Members may initiate
    /// their own; admins may initiate anyone's.
    ///
    /// Creates a `PENDING` record for the plan's current price.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AccessDenied`] for other callers,
    /// [`ServiceError::MemberNotFound`] for an unknown member,
    /// [`ServiceError::NoPlanAssigned`] when the member has no plan,
    /// [`ServiceError::PlanNotFound`] when the member's plan no longer
    /// exists, or a storage error.
    pub fn initiate(&self, actor: &Actor, member_id: &MemberId) -> Result<PaymentRecord> {
        access::require_self_or_admin(actor, member_id)?;
        let member = self
            .members
            .find_by_id(member_id.as_str())?
            .ok_or_else(|| ServiceError::member_not_found(member_id))?;

        let plan_id = member.plan_id.ok_or_else(|| ServiceError::NoPlanAssigned {
            member_id: member_id.to_string(),
        })?;
        let plan = self
            .plans
            .find_by_id(plan_id.as_str())?
            .ok_or_else(|| ServiceError::plan_not_found(&plan_id))?;

        let record = PaymentRecord {
            id: None,
            member_id: member_id.clone(),
            amount: plan.price,
            status: PaymentStatus::Pending,
            created_at: Utc::now(),
            paid_at: None,
        };
        Ok(self.payments.save(record)?)
    }

    /// Settle a payment. Restricted to administrators.
    ///
    /// Allowed from `PENDING` or `OVERDUE`; stamps the settlement time.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers,
    /// [`ServiceError::PaymentNotFound`] for an unknown identifier,
    /// [`ServiceError::InvalidPaymentTransition`] from any other status, or
    /// a storage error.
    pub fn mark_paid(&self, actor: &Actor, id: &PaymentId) -> Result<PaymentRecord> {
        access::require_admin(actor)?;
        self.transition(id, PaymentStatus::Paid)
    }

    /// Flag a pending payment as overdue. Restricted to administrators.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers,
    /// [`ServiceError::PaymentNotFound`] for an unknown identifier,
    /// [`ServiceError::InvalidPaymentTransition`] from any status but
    /// `PENDING`, or a storage error.
    pub fn mark_overdue(&self, actor: &Actor, id: &PaymentId) -> Result<PaymentRecord> {
        access::require_admin(actor)?;
        self.transition(id, PaymentStatus::Overdue)
    }

    /// List a member's payment records, newest first. Members may list
    /// their own; admins may list anyone's.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AccessDenied`] for other callers,
    /// [`ServiceError::MemberNotFound`] for an unknown member, or a storage
    /// error.
    pub fn payments_for_member(
        &self,
        actor: &Actor,
        member_id: &MemberId,
    ) -> Result<Vec<PaymentRecord>> {
        access::require_self_or_admin(actor, member_id)?;
        if self.members.find_by_id(member_id.as_str())?.is_none() {
            return Err(ServiceError::member_not_found(member_id));
        }

        let mut records = self
            .payments
            .find_where(|record| &record.member_id == member_id)?;
        // ULIDs are time-ordered, so the identifier breaks created_at ties.
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }

    /// The status of a member's most recent payment, if any.
    ///
    /// # Errors
    ///
    /// As for [`PaymentService::payments_for_member`].
    pub fn latest_status_for_member(
        &self,
        actor: &Actor,
        member_id: &MemberId,
    ) -> Result<Option<PaymentStatus>> {
        Ok(self
            .payments_for_member(actor, member_id)?
            .first()
            .map(|record| record.status))
    }

    /// Look up a payment record. Members may see their own records; admins
    /// may see any.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AccessDenied`] when the record belongs to
    /// someone else, or a storage error.
    pub fn payment_by_id(&self, actor: &Actor, id: &PaymentId) -> Result<Option<PaymentRecord>> {
        let Some(record) = self.payments.find_by_id(id.as_str())? else {
            return Ok(None);
        };
        access::require_self_or_admin(actor, &record.member_id)?;
        Ok(Some(record))
    }

    fn transition(&self, id: &PaymentId, to: PaymentStatus) -> Result<PaymentRecord> {
        let mut record = self
            .payments
            .find_by_id(id.as_str())?
            .ok_or_else(|| ServiceError::payment_not_found(id))?;

        if !record.status.can_transition(to) {
            return Err(ServiceError::InvalidPaymentTransition {
                from: record.status,
                to,
            });
        }
        record.status = to;
        if to == PaymentStatus::Paid {
            record.paid_at = Some(Utc::now());
        }
        Ok(self.payments.save(record)?)
    }
}
