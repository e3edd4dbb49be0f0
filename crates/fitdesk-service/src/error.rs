//! Error types for the fitdesk services.

use fitdesk_core::{
    FeedbackId, InvalidStaffRole, MemberId, PaymentId, PaymentStatus, PlanId, StaffId,
};
use fitdesk_store::StoreError;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors surfaced by the entity services.
///
/// Validation failures, lookups that came up empty, state-dependent
/// business-rule refusals and storage problems are all distinct variants so
/// callers can react to each differently. Any error from a mutating call
/// means stored state was left untouched.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------
    /// A required field was empty or whitespace-only.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The password did not meet the minimum length.
    #[error("password must be at least {min} characters long")]
    PasswordTooShort {
        /// The minimum accepted length.
        min: usize,
    },

    /// The email is already used by another account of the same kind.
    #[error("email already registered: {email}")]
    EmailTaken {
        /// The conflicting email.
        email: String,
    },

    /// The staff role name was not recognised.
    #[error(transparent)]
    InvalidRole(#[from] InvalidStaffRole),

    /// A plan with the same name already exists (case-insensitive).
    #[error("plan name {name:?} already exists")]
    DuplicatePlanName {
        /// The conflicting plan name.
        name: String,
    },

    /// The plan price was negative.
    #[error("price must not be negative")]
    NegativePrice,

    /// The plan duration was zero months.
    #[error("duration must be at least one month")]
    InvalidDuration,

    // ------------------------------------------------------------------
    // Not found
    // ------------------------------------------------------------------
    /// No member with the given identifier.
    #[error("member not found: {id}")]
    MemberNotFound {
        /// The identifier that did not match.
        id: String,
    },

    /// No staff account with the given identifier.
    #[error("staff not found: {id}")]
    StaffNotFound {
        /// The identifier that did not match.
        id: String,
    },

    /// No plan with the given identifier.
    #[error("plan not found: {id}")]
    PlanNotFound {
        /// The identifier that did not match.
        id: String,
    },

    /// No feedback entry with the given identifier.
    #[error("feedback not found: {id}")]
    FeedbackNotFound {
        /// The identifier that did not match.
        id: String,
    },

    /// No payment record with the given identifier.
    #[error("payment not found: {id}")]
    PaymentNotFound {
        /// The identifier that did not match.
        id: String,
    },

    // ------------------------------------------------------------------
    // Business rules
    // ------------------------------------------------------------------
    /// Refused to remove the only remaining administrator.
    #[error("cannot remove the last administrator")]
    LastAdmin,

    /// Refused to delete a plan that members still reference.
    #[error("plan {id} is still referenced by {members} member(s)")]
    PlanInUse {
        /// The plan identifier.
        id: String,
        /// How many members reference it.
        members: usize,
    },

    /// The requested payment status change is not allowed.
    #[error("payment cannot move from {from} to {to}")]
    InvalidPaymentTransition {
        /// The record's current status.
        from: PaymentStatus,
        /// The requested status.
        to: PaymentStatus,
    },

    /// The member has no plan, so there is nothing to bill.
    #[error("member {member_id} has no membership plan")]
    NoPlanAssigned {
        /// The member identifier.
        member_id: String,
    },

    // ------------------------------------------------------------------
    // Authorization
    // ------------------------------------------------------------------
    /// The operation is restricted to administrators.
    #[error("operation requires an administrator")]
    AdminRequired,

    /// The caller may not act on this record.
    #[error("access denied")]
    AccessDenied,

    // ------------------------------------------------------------------
    // Infrastructure
    // ------------------------------------------------------------------
    /// Hashing a password failed.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    /// The storage layer reported a whole-file failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub(crate) fn member_not_found(id: &MemberId) -> Self {
        Self::MemberNotFound { id: id.to_string() }
    }

    pub(crate) fn staff_not_found(id: &StaffId) -> Self {
        Self::StaffNotFound { id: id.to_string() }
    }

    pub(crate) fn plan_not_found(id: &PlanId) -> Self {
        Self::PlanNotFound { id: id.to_string() }
    }

    pub(crate) fn feedback_not_found(id: &FeedbackId) -> Self {
        Self::FeedbackNotFound { id: id.to_string() }
    }

    pub(crate) fn payment_not_found(id: &PaymentId) -> Self {
        Self::PaymentNotFound { id: id.to_string() }
    }
}
