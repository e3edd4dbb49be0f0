//! Core types for the fitdesk membership system.
//!
//! This crate provides the domain model shared by the storage and service
//! layers:
//!
//! - **Identifiers**: [`MemberId`], [`StaffId`], [`PlanId`], [`FeedbackId`],
//!   [`PaymentId`]
//! - **Entities**: [`Member`], [`Staff`], [`MembershipPlan`], [`Feedback`],
//!   [`PaymentRecord`]
//! - **Closed enumerations**: [`StaffRole`], [`FeedbackStatus`],
//!   [`PaymentStatus`]
//! - **Caller identity**: [`Actor`], passed explicitly into privileged
//!   operations instead of being read from an ambient session
//!
//! Monetary values use [`rust_decimal::Decimal`] to avoid floating point
//! rounding; timestamps are [`chrono::DateTime<Utc>`](chrono::DateTime).
//! Statuses and roles have an explicit textual mapping via `Display` /
//! `FromStr`; unknown names are rejected rather than defaulted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actor;
pub mod feedback;
pub mod ids;
pub mod member;
pub mod payment;
pub mod plan;
pub mod staff;

pub use actor::Actor;
pub use feedback::{Feedback, FeedbackStatus, InvalidFeedbackStatus, NewFeedback};
pub use ids::{FeedbackId, IdError, MemberId, PaymentId, PlanId, StaffId};
pub use member::{Member, MemberUpdate, NewMember};
pub use payment::{InvalidPaymentStatus, PaymentRecord, PaymentStatus};
pub use plan::{MembershipPlan, NewPlan};
pub use staff::{InvalidStaffRole, NewStaff, Staff, StaffRole, StaffUpdate};
