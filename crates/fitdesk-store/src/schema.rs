//! Data-directory layout.
//!
//! Each entity type persists to its own file inside the configured data
//! directory. There is no header line; fields appear in the fixed order
//! defined by the [`Record`](crate::Record) implementations in
//! [`records`](crate::records).

/// File names for the per-entity stores.
pub mod files {
    /// Member accounts, keyed by random UUID token.
    pub const MEMBERS: &str = "members.csv";

    /// Staff accounts, keyed by sequential `S<N>` identifier.
    pub const STAFF: &str = "staff.csv";

    /// Membership-plan catalog, keyed by sequential `P<N>` identifier.
    pub const PLANS: &str = "plans.csv";

    /// Member feedback, keyed by sequential `F<N>` identifier.
    pub const FEEDBACK: &str = "feedback.csv";

    /// Payment records, keyed by time-ordered ULID token.
    pub const PAYMENTS: &str = "payments.csv";
}
