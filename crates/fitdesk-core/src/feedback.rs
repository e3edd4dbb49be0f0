//! Member feedback types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::{FeedbackId, MemberId};

/// Highest rating a member can give.
pub const MAX_RATING: u8 = 5;

/// Subject used when a member leaves the subject line blank.
pub const DEFAULT_SUBJECT: &str = "General Feedback";

/// A feedback entry submitted by a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// The feedback identifier; `None` until the store assigns one.
    pub id: Option<FeedbackId>,

    /// The member who submitted the feedback.
    pub member_id: MemberId,

    /// When the feedback was submitted (server-assigned).
    pub submitted_at: DateTime<Utc>,

    /// Star rating, 0 to [`MAX_RATING`]; 0 means not applicable.
    pub rating: u8,

    /// Short subject line.
    pub subject: String,

    /// Free-text comments.
    pub comments: String,

    /// Moderation status.
    pub status: FeedbackStatus,
}

/// The closed set of feedback moderation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackStatus {
    /// Newly submitted, not yet looked at.
    New,
    /// Seen by staff.
    Read,
    /// Handled; no further action expected.
    Resolved,
    /// Kept for the record only.
    Archived,
}

impl FeedbackStatus {
    /// The canonical textual name used in the persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Read => "READ",
            Self::Resolved => "RESOLVED",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a feedback status name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feedback status: {0:?}")]
pub struct InvalidFeedbackStatus(pub String);

impl FromStr for FeedbackStatus {
    type Err = InvalidFeedbackStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::New, Self::Read, Self::Resolved, Self::Archived]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidFeedbackStatus(name.to_string()))
    }
}

/// Payload for submitting feedback.
///
/// Identifier, submission time and status are always server-assigned; any
/// client-supplied values for those are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFeedback {
    /// The submitting member.
    pub member_id: MemberId,
    /// Requested rating; values outside 0..=[`MAX_RATING`] are recorded as 0.
    pub rating: i32,
    /// Subject line; blank falls back to [`DEFAULT_SUBJECT`].
    pub subject: String,
    /// Free-text comments; must not be blank.
    pub comments: String,
}
