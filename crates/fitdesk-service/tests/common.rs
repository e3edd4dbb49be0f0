//! Shared harness for the service integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use tempfile::TempDir;

use fitdesk_core::{Actor, Member, MembershipPlan, NewMember, NewPlan};
use fitdesk_service::{App, Config};

/// Password used for members created through the harness.
pub const MEMBER_PASSWORD: &str = "sturdy-pass-1";

pub struct TestHarness {
    dir: TempDir,
    pub app: App,
    pub admin: Actor,
}

impl TestHarness {
    /// Open an app in a fresh tempdir and seed the bootstrap admin.
    pub fn new() -> Self {
        init_tracing();
        let dir = TempDir::new().unwrap();
        let app = App::open(Config::with_data_dir(dir.path())).unwrap();
        let seeded = app.ensure_admin().unwrap().expect("bootstrap admin");
        let admin = Actor::staff(seeded.id.clone().unwrap(), seeded.role);
        Self { dir, app, admin }
    }

    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_plan(&self, name: &str, price: &str, months: u32) -> MembershipPlan {
        self.app
            .plans
            .add(
                &self.admin,
                NewPlan {
                    name: name.to_string(),
                    description: format!("{name} membership"),
                    duration_months: months,
                    price: Decimal::from_str(price).unwrap(),
                },
            )
            .unwrap()
    }

    pub fn register_member(&self, email: &str) -> Member {
        self.register_member_on_plan(email, None)
    }

    pub fn register_member_on_plan(&self, email: &str, plan: Option<&MembershipPlan>) -> Member {
        self.app
            .members
            .register(NewMember {
                name: "Test Member".to_string(),
                email: email.to_string(),
                password: MEMBER_PASSWORD.to_string(),
                phone: "555-0100".to_string(),
                plan_id: plan.and_then(|p| p.id.clone()),
            })
            .unwrap()
    }

    pub fn member_actor(member: &Member) -> Actor {
        Actor::Member(member.id.clone().expect("registered member has an id"))
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
