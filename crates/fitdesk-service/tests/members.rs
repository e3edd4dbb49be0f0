//! Member registration, profile updates and login.

mod common;

use common::{TestHarness, MEMBER_PASSWORD};
use fitdesk_core::{MemberUpdate, NewMember, PlanId};
use fitdesk_service::ServiceError;

fn new_member(email: &str, password: &str) -> NewMember {
    NewMember {
        name: "Ada Jones".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        phone: "555-0199".to_string(),
        plan_id: None,
    }
}

#[test]
fn registration_assigns_id_and_hashes_the_password() {
    let harness = TestHarness::new();

    let member = harness
        .app
        .members
        .register(new_member("ada@example.com", "correct horse"))
        .unwrap();

    assert!(member.id.is_some());
    assert_ne!(member.password_hash, "correct horse");
    assert!(member.password_hash.starts_with("$argon2"));
}

#[test]
fn duplicate_email_is_rejected_regardless_of_casing() {
    let harness = TestHarness::new();
    harness.register_member("ada@example.com");

    let err = harness
        .app
        .members
        .register(new_member("ADA@Example.COM", "correct horse"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmailTaken { .. }));
}

#[test]
fn blank_email_is_rejected() {
    let harness = TestHarness::new();
    let err = harness
        .app
        .members
        .register(new_member("   ", "correct horse"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmptyField { field: "email" }));
}

#[test]
fn short_password_is_rejected() {
    let harness = TestHarness::new();
    let err = harness
        .app
        .members
        .register(new_member("ada@example.com", "abc12"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::PasswordTooShort { min: 6 }));
}

#[test]
fn unknown_plan_is_rejected() {
    let harness = TestHarness::new();
    let mut registration = new_member("ada@example.com", "correct horse");
    registration.plan_id = Some(PlanId::new("P99"));

    let err = harness.app.members.register(registration).unwrap_err();
    assert!(matches!(err, ServiceError::PlanNotFound { .. }));
}

#[test]
fn update_merges_only_nonblank_fields() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let actor = TestHarness::member_actor(&member);
    let id = member.id.clone().unwrap();

    let updated = harness
        .app
        .members
        .update(
            &actor,
            &id,
            MemberUpdate {
                name: Some("Ada L. Jones".to_string()),
                phone: Some("   ".to_string()),
                ..MemberUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Ada L. Jones");
    assert_eq!(updated.phone, member.phone);
    assert_eq!(updated.email, member.email);
    assert_eq!(updated.password_hash, member.password_hash);
}

#[test]
fn update_may_keep_own_email_but_not_take_anothers() {
    let harness = TestHarness::new();
    let ada = harness.register_member("ada@example.com");
    harness.register_member("ben@example.com");
    let actor = TestHarness::member_actor(&ada);
    let id = ada.id.clone().unwrap();

    // Re-submitting your own email is not a conflict.
    harness
        .app
        .members
        .update(
            &actor,
            &id,
            MemberUpdate {
                email: Some("ADA@example.com".to_string()),
                ..MemberUpdate::default()
            },
        )
        .unwrap();

    let err = harness
        .app
        .members
        .update(
            &actor,
            &id,
            MemberUpdate {
                email: Some("ben@example.com".to_string()),
                ..MemberUpdate::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmailTaken { .. }));
}

#[test]
fn members_cannot_touch_other_profiles() {
    let harness = TestHarness::new();
    let ada = harness.register_member("ada@example.com");
    let ben = harness.register_member("ben@example.com");

    let err = harness
        .app
        .members
        .update(
            &TestHarness::member_actor(&ada),
            &ben.id.clone().unwrap(),
            MemberUpdate::default(),
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::AccessDenied));
}

#[test]
fn password_update_changes_the_accepted_login() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let actor = TestHarness::member_actor(&member);
    let id = member.id.clone().unwrap();

    harness
        .app
        .members
        .update(
            &actor,
            &id,
            MemberUpdate {
                password: Some("brand new secret".to_string()),
                ..MemberUpdate::default()
            },
        )
        .unwrap();

    assert!(harness
        .app
        .members
        .login("ada@example.com", MEMBER_PASSWORD)
        .unwrap()
        .is_none());
    assert!(harness
        .app
        .members
        .login("ada@example.com", "brand new secret")
        .unwrap()
        .is_some());
}

#[test]
fn login_trims_and_casefolds_the_email() {
    let harness = TestHarness::new();
    harness.register_member("ada@example.com");

    let found = harness
        .app
        .members
        .login("  ADA@EXAMPLE.COM  ", MEMBER_PASSWORD)
        .unwrap();
    assert!(found.is_some());
}

#[test]
fn login_failures_are_indistinguishable() {
    let harness = TestHarness::new();
    harness.register_member("ada@example.com");

    assert!(harness
        .app
        .members
        .login("ada@example.com", "wrong password")
        .unwrap()
        .is_none());
    assert!(harness
        .app
        .members
        .login("nobody@example.com", MEMBER_PASSWORD)
        .unwrap()
        .is_none());
}

#[test]
fn listing_and_deleting_require_an_admin() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let actor = TestHarness::member_actor(&member);
    let id = member.id.clone().unwrap();

    assert!(matches!(
        harness.app.members.list(&actor),
        Err(ServiceError::AdminRequired)
    ));
    assert!(matches!(
        harness.app.members.delete(&actor, &id),
        Err(ServiceError::AdminRequired)
    ));

    assert_eq!(harness.app.members.list(&harness.admin).unwrap().len(), 1);
    assert!(harness.app.members.delete(&harness.admin, &id).unwrap());
    assert!(!harness.app.members.delete(&harness.admin, &id).unwrap());
}
