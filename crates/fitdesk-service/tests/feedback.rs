//! Feedback submission and moderation.

mod common;

use chrono::{TimeZone, Utc};
use common::TestHarness;
use fitdesk_core::{Feedback, FeedbackStatus, NewFeedback};
use fitdesk_service::ServiceError;
use fitdesk_store::{schema::files, FlatFileStore};

fn submission(member: &fitdesk_core::Member, comments: &str) -> NewFeedback {
    NewFeedback {
        member_id: member.id.clone().unwrap(),
        rating: 4,
        subject: "Classes".to_string(),
        comments: comments.to_string(),
    }
}

#[test]
fn submission_gets_server_assigned_fields() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");

    let entry = harness
        .app
        .feedback
        .submit(
            &TestHarness::member_actor(&member),
            submission(&member, "More evening slots, please"),
        )
        .unwrap();

    assert_eq!(entry.id.as_ref().unwrap().as_str(), "F1");
    assert_eq!(entry.status, FeedbackStatus::New);
    assert_eq!(entry.rating, 4);
}

#[test]
fn blank_subject_falls_back_to_the_default() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let mut new = submission(&member, "Good spin class");
    new.subject = "   ".to_string();

    let entry = harness
        .app
        .feedback
        .submit(&TestHarness::member_actor(&member), new)
        .unwrap();
    assert_eq!(entry.subject, "General Feedback");
}

#[test]
fn out_of_range_ratings_are_recorded_as_zero() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let actor = TestHarness::member_actor(&member);

    for rating in [-1, 9, 100] {
        let mut new = submission(&member, "rating check");
        new.rating = rating;
        let entry = harness.app.feedback.submit(&actor, new).unwrap();
        assert_eq!(entry.rating, 0, "rating {rating} should be recorded as 0");
    }
}

#[test]
fn blank_comments_are_rejected() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");

    let err = harness
        .app
        .feedback
        .submit(
            &TestHarness::member_actor(&member),
            submission(&member, "   "),
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmptyField { field: "comments" }));
}

#[test]
fn submissions_for_unknown_members_are_rejected() {
    let harness = TestHarness::new();
    let new = NewFeedback {
        member_id: "ghost-member".parse().unwrap(),
        rating: 3,
        subject: String::new(),
        comments: "hello".to_string(),
    };

    let err = harness.app.feedback.submit(&harness.admin, new).unwrap_err();
    assert!(matches!(err, ServiceError::MemberNotFound { .. }));
}

#[test]
fn members_cannot_submit_for_each_other() {
    let harness = TestHarness::new();
    let ada = harness.register_member("ada@example.com");
    let ben = harness.register_member("ben@example.com");

    let err = harness
        .app
        .feedback
        .submit(
            &TestHarness::member_actor(&ben),
            submission(&ada, "impersonated"),
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::AccessDenied));
}

#[test]
fn listings_come_newest_first() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let member_id = member.id.clone().unwrap();

    // Write entries with controlled timestamps straight through the store.
    let store: FlatFileStore<Feedback> =
        FlatFileStore::open(harness.data_dir().join(files::FEEDBACK)).unwrap();
    for (day, comments) in [(1, "oldest"), (3, "newest"), (2, "middle")] {
        store
            .save(Feedback {
                id: None,
                member_id: member_id.clone(),
                submitted_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
                rating: 3,
                subject: "Order".to_string(),
                comments: comments.to_string(),
                status: FeedbackStatus::New,
            })
            .unwrap();
    }

    let all = harness.app.feedback.all(&harness.admin).unwrap();
    let order: Vec<_> = all.iter().map(|entry| entry.comments.as_str()).collect();
    assert_eq!(order, ["newest", "middle", "oldest"]);

    let by_member = harness
        .app
        .feedback
        .by_member(&TestHarness::member_actor(&member), &member_id)
        .unwrap();
    assert_eq!(by_member.len(), 3);
    assert_eq!(by_member[0].comments, "newest");
}

#[test]
fn moderation_is_admin_only() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let actor = TestHarness::member_actor(&member);
    let entry = harness
        .app
        .feedback
        .submit(&actor, submission(&member, "please moderate me"))
        .unwrap();
    let id = entry.id.clone().unwrap();

    assert!(matches!(
        harness.app.feedback.all(&actor),
        Err(ServiceError::AdminRequired)
    ));
    assert!(matches!(
        harness
            .app
            .feedback
            .set_status(&actor, &id, FeedbackStatus::Read),
        Err(ServiceError::AdminRequired)
    ));

    let updated = harness
        .app
        .feedback
        .set_status(&harness.admin, &id, FeedbackStatus::Resolved)
        .unwrap();
    assert_eq!(updated.status, FeedbackStatus::Resolved);
}

#[test]
fn status_filter_returns_only_matching_entries() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let actor = TestHarness::member_actor(&member);

    let first = harness
        .app
        .feedback
        .submit(&actor, submission(&member, "first"))
        .unwrap();
    harness
        .app
        .feedback
        .submit(&actor, submission(&member, "second"))
        .unwrap();
    harness
        .app
        .feedback
        .set_status(
            &harness.admin,
            &first.id.clone().unwrap(),
            FeedbackStatus::Archived,
        )
        .unwrap();

    let archived = harness
        .app
        .feedback
        .by_status(&harness.admin, FeedbackStatus::Archived)
        .unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].comments, "first");

    let fresh = harness
        .app
        .feedback
        .by_status(&harness.admin, FeedbackStatus::New)
        .unwrap();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].comments, "second");
}

#[test]
fn deleting_feedback_is_idempotent() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let entry = harness
        .app
        .feedback
        .submit(
            &TestHarness::member_actor(&member),
            submission(&member, "short-lived"),
        )
        .unwrap();
    let id = entry.id.clone().unwrap();

    assert!(harness.app.feedback.delete(&harness.admin, &id).unwrap());
    assert!(!harness.app.feedback.delete(&harness.admin, &id).unwrap());
}
