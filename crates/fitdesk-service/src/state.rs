//! Application wiring.

use std::sync::Arc;

use fitdesk_core::{Feedback, Member, MembershipPlan, PaymentRecord, Staff};
use fitdesk_store::schema::files;
use fitdesk_store::FlatFileStore;

use crate::bootstrap;
use crate::config::Config;
use crate::error::Result;
use crate::feedback::FeedbackService;
use crate::members::MemberService;
use crate::payments::PaymentService;
use crate::plans::PlanService;
use crate::staff::StaffService;

/// The wired-up application: one store per entity type under the configured
/// data directory, shared across the services that cross-reference them.
#[derive(Clone)]
pub struct App {
    /// The configuration the app was opened with.
    pub config: Config,

    /// Member accounts.
    pub members: MemberService,

    /// Staff administration.
    pub staff: StaffService,

    /// Membership-plan catalog.
    pub plans: PlanService,

    /// Member feedback.
    pub feedback: FeedbackService,

    /// Payment tracking.
    pub payments: PaymentService,
}

impl App {
    /// Open every store under `config.data_dir` and wire the services.
    ///
    /// Creates the data directory if needed. Does not seed the
    /// administrator; call [`App::ensure_admin`] for that.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a store file exists but cannot be read.
    pub fn open(config: Config) -> Result<Self> {
        let members: Arc<FlatFileStore<Member>> =
            Arc::new(FlatFileStore::open(config.data_dir.join(files::MEMBERS))?);
        let staff: Arc<FlatFileStore<Staff>> =
            Arc::new(FlatFileStore::open(config.data_dir.join(files::STAFF))?);
        let plans: Arc<FlatFileStore<MembershipPlan>> =
            Arc::new(FlatFileStore::open(config.data_dir.join(files::PLANS))?);
        let feedback: Arc<FlatFileStore<Feedback>> =
            Arc::new(FlatFileStore::open(config.data_dir.join(files::FEEDBACK))?);
        let payments: Arc<FlatFileStore<PaymentRecord>> =
            Arc::new(FlatFileStore::open(config.data_dir.join(files::PAYMENTS))?);

        Ok(Self {
            members: MemberService::new(Arc::clone(&members), Arc::clone(&plans)),
            staff: StaffService::new(staff),
            plans: PlanService::new(Arc::clone(&plans), Arc::clone(&members)),
            feedback: FeedbackService::new(feedback, Arc::clone(&members)),
            payments: PaymentService::new(payments, members, plans),
            config,
        })
    }

    /// Seed the configured administrator account if no admin exists yet.
    ///
    /// Returns the created account, or `None` when nothing needed seeding.
    /// Meant to run synchronously at startup, before the embedding layer
    /// accepts requests.
    ///
    /// # Errors
    ///
    /// Returns the staff service's validation error if the seed credentials
    /// are unusable, or a storage error.
    pub fn ensure_admin(&self) -> Result<Option<Staff>> {
        bootstrap::ensure_admin(&self.staff, &self.config.admin)
    }
}
