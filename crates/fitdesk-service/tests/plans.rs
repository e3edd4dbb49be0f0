//! Membership-plan catalog rules.

mod common;

use std::str::FromStr;

use common::TestHarness;
use fitdesk_core::NewPlan;
use fitdesk_service::ServiceError;
use rust_decimal::Decimal;

fn plan(name: &str, price: &str, months: u32) -> NewPlan {
    NewPlan {
        name: name.to_string(),
        description: format!("{name} membership"),
        duration_months: months,
        price: Decimal::from_str(price).unwrap(),
    }
}

#[test]
fn catalog_rules_walkthrough() {
    let harness = TestHarness::new();

    let basic = harness
        .app
        .plans
        .add(&harness.admin, plan("Basic", "10.00", 1))
        .unwrap();
    assert_eq!(basic.id.as_ref().unwrap().as_str(), "P1");

    // Same name, any casing: refused.
    let err = harness
        .app
        .plans
        .add(&harness.admin, plan("basic", "5", 3))
        .unwrap_err();
    assert!(matches!(err, ServiceError::DuplicatePlanName { .. }));

    // Negative price: refused.
    let err = harness
        .app
        .plans
        .add(&harness.admin, plan("Pro", "-5", 3))
        .unwrap_err();
    assert!(matches!(err, ServiceError::NegativePrice));

    // A valid plan gets the next identifier.
    let pro = harness
        .app
        .plans
        .add(&harness.admin, plan("Pro", "20", 3))
        .unwrap();
    assert_eq!(pro.id.as_ref().unwrap().as_str(), "P2");
}

#[test]
fn zero_duration_is_rejected() {
    let harness = TestHarness::new();
    let err = harness
        .app
        .plans
        .add(&harness.admin, plan("Basic", "10.00", 0))
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidDuration));
}

#[test]
fn catalog_management_requires_an_admin() {
    let harness = TestHarness::new();
    let member = harness.register_member("ada@example.com");
    let actor = TestHarness::member_actor(&member);

    assert!(matches!(
        harness.app.plans.add(&actor, plan("Basic", "10.00", 1)),
        Err(ServiceError::AdminRequired)
    ));
}

#[test]
fn update_excludes_the_plan_itself_from_uniqueness() {
    let harness = TestHarness::new();
    let basic = harness.add_plan("Basic", "10.00", 1);
    harness.add_plan("Pro", "20.00", 3);
    let id = basic.id.clone().unwrap();

    // Keeping its own name is fine.
    let updated = harness
        .app
        .plans
        .update(&harness.admin, &id, plan("Basic", "12.00", 1))
        .unwrap();
    assert_eq!(updated.price.to_string(), "12.00");

    // Taking another plan's name is not.
    let err = harness
        .app
        .plans
        .update(&harness.admin, &id, plan("PRO", "12.00", 1))
        .unwrap_err();
    assert!(matches!(err, ServiceError::DuplicatePlanName { .. }));
}

#[test]
fn updating_an_unknown_plan_is_an_error() {
    let harness = TestHarness::new();
    let err = harness
        .app
        .plans
        .update(
            &harness.admin,
            &"P99".parse().unwrap(),
            plan("Ghost", "10.00", 1),
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::PlanNotFound { .. }));
}

#[test]
fn a_referenced_plan_cannot_be_deleted() {
    let harness = TestHarness::new();
    let basic = harness.add_plan("Basic", "10.00", 1);
    let member = harness.register_member_on_plan("ada@example.com", Some(&basic));
    let plan_id = basic.id.clone().unwrap();

    let err = harness
        .app
        .plans
        .delete(&harness.admin, &plan_id)
        .unwrap_err();
    assert!(matches!(err, ServiceError::PlanInUse { members: 1, .. }));

    // Once the member is gone the plan can go too.
    harness
        .app
        .members
        .delete(&harness.admin, &member.id.unwrap())
        .unwrap();
    assert!(harness.app.plans.delete(&harness.admin, &plan_id).unwrap());
}

#[test]
fn deleting_an_unknown_plan_reports_not_removed() {
    let harness = TestHarness::new();
    assert!(!harness
        .app
        .plans
        .delete(&harness.admin, &"P99".parse().unwrap())
        .unwrap());
}

#[test]
fn the_catalog_is_publicly_listable() {
    let harness = TestHarness::new();
    harness.add_plan("Basic", "10.00", 1);
    harness.add_plan("Pro", "20.00", 3);

    let listed = harness.app.plans.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Basic");
}
