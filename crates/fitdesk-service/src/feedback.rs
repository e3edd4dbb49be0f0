//! Member feedback collection and moderation.

use std::sync::Arc;

use chrono::Utc;

use fitdesk_core::feedback::{DEFAULT_SUBJECT, MAX_RATING};
use fitdesk_core::{Actor, Feedback, FeedbackId, FeedbackStatus, Member, MemberId, NewFeedback};
use fitdesk_store::FlatFileStore;

use crate::access;
use crate::error::{Result, ServiceError};
use crate::input;

/// Service for member feedback.
#[derive(Clone)]
pub struct FeedbackService {
    feedback: Arc<FlatFileStore<Feedback>>,
    members: Arc<FlatFileStore<Member>>,
}

impl FeedbackService {
    pub(crate) fn new(
        feedback: Arc<FlatFileStore<Feedback>>,
        members: Arc<FlatFileStore<Member>>,
    ) -> Self {
        Self { feedback, members }
    }

    /// Submit feedback on behalf of a member.
    ///
    /// The member must exist and comments must not be blank. A rating
    /// outside `0..=5` is recorded as 0 and a blank subject falls back to
    /// the default. Identifier, submission time and `NEW` status are always
    /// server-assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AccessDenied`] unless the caller is the
    /// member or an admin, [`ServiceError::MemberNotFound`] for an unknown
    /// member, the violated validation rule, or a storage error.
    pub fn submit(&self, actor: &Actor, new: NewFeedback) -> Result<Feedback> {
        access::require_self_or_admin(actor, &new.member_id)?;
        self.require_member(&new.member_id)?;
        let comments = input::required_trimmed("comments", &new.comments)?;

        let rating = match u8::try_from(new.rating) {
            Ok(rating) if rating <= MAX_RATING => rating,
            _ => {
                tracing::warn!(rating = new.rating, "rating out of range, recording as 0");
                0
            }
        };
        let subject = match new.subject.trim() {
            "" => DEFAULT_SUBJECT.to_string(),
            subject => subject.to_string(),
        };

        let entry = Feedback {
            id: None,
            member_id: new.member_id,
            submitted_at: Utc::now(),
            rating,
            subject,
            comments,
            status: FeedbackStatus::New,
        };
        Ok(self.feedback.save(entry)?)
    }

    /// List all feedback, most recent first. Restricted to administrators.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers, or a
    /// storage error.
    pub fn all(&self, actor: &Actor) -> Result<Vec<Feedback>> {
        access::require_admin(actor)?;
        Ok(newest_first(self.feedback.find_all()?))
    }

    /// List a member's feedback, most recent first. Members may list their
    /// own; admins may list anyone's.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AccessDenied`] for other callers,
    /// [`ServiceError::MemberNotFound`] for an unknown member, or a storage
    /// error.
    pub fn by_member(&self, actor: &Actor, member_id: &MemberId) -> Result<Vec<Feedback>> {
        access::require_self_or_admin(actor, member_id)?;
        self.require_member(member_id)?;
        Ok(newest_first(
            self.feedback
                .find_where(|entry| &entry.member_id == member_id)?,
        ))
    }

    /// List feedback in a given status, most recent first. Restricted to
    /// administrators.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers, or a
    /// storage error.
    pub fn by_status(&self, actor: &Actor, status: FeedbackStatus) -> Result<Vec<Feedback>> {
        access::require_admin(actor)?;
        Ok(newest_first(
            self.feedback.find_where(|entry| entry.status == status)?,
        ))
    }

    /// Look up a feedback entry by identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the feedback file cannot be read.
    pub fn feedback_by_id(&self, id: &FeedbackId) -> Result<Option<Feedback>> {
        Ok(self.feedback.find_by_id(id.as_str())?)
    }

    /// Change a feedback entry's moderation status. Restricted to
    /// administrators.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers,
    /// [`ServiceError::FeedbackNotFound`] if the identifier is unknown, or
    /// a storage error.
    pub fn set_status(
        &self,
        actor: &Actor,
        id: &FeedbackId,
        status: FeedbackStatus,
    ) -> Result<Feedback> {
        access::require_admin(actor)?;
        let mut entry = self
            .feedback
            .find_by_id(id.as_str())?
            .ok_or_else(|| ServiceError::feedback_not_found(id))?;

        entry.status = status;
        Ok(self.feedback.save(entry)?)
    }

    /// Delete a feedback entry. Restricted to administrators.
    ///
    /// Returns whether an entry was removed; an unknown identifier is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::AdminRequired`] for non-admin callers, or a
    /// storage error.
    pub fn delete(&self, actor: &Actor, id: &FeedbackId) -> Result<bool> {
        access::require_admin(actor)?;
        if self.feedback.find_by_id(id.as_str())?.is_none() {
            return Ok(false);
        }
        Ok(self.feedback.delete_by_id(id.as_str())?)
    }

    fn require_member(&self, id: &MemberId) -> Result<()> {
        if self.members.find_by_id(id.as_str())?.is_none() {
            return Err(ServiceError::member_not_found(id));
        }
        Ok(())
    }
}

fn newest_first(mut entries: Vec<Feedback>) -> Vec<Feedback> {
    entries.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    entries
}
