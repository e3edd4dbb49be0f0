//! Flat-file storage layer for fitdesk.
//!
//! Each entity type persists to its own delimited text file, one record per
//! line, no header. A [`FlatFileStore`] loads the whole file on every read,
//! rewrites the whole file on every mutation, and serializes all access
//! behind a per-store lock so a read-modify-write cycle is never interleaved
//! with another. The rewrite lands via a temp file and rename, so the
//! on-disk file is always a complete snapshot.
//!
//! # Files
//!
//! - `members.csv`: member accounts, random UUID identifiers
//! - `staff.csv`: staff accounts, sequential `S<N>` identifiers
//! - `plans.csv`: membership-plan catalog, sequential `P<N>` identifiers
//! - `feedback.csv`: member feedback, sequential `F<N>` identifiers
//! - `payments.csv`: payment records, time-ordered ULID identifiers
//!
//! Malformed lines are skipped with a warning during load; they never abort
//! loading the rest of the file. Whole-file I/O failures surface as
//! [`StoreError::Io`].
//!
//! # Example
//!
//! ```no_run
//! use fitdesk_core::MembershipPlan;
//! use fitdesk_store::{schema, FlatFileStore};
//!
//! # fn main() -> fitdesk_store::Result<()> {
//! let plans: FlatFileStore<MembershipPlan> =
//!     FlatFileStore::open(format!("data/{}", schema::files::PLANS))?;
//!
//! for plan in plans.find_all()? {
//!     println!("{}: {}", plan.name, plan.price);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alloc;
pub mod codec;
pub mod error;
pub mod file;
pub mod records;
pub mod schema;

pub use codec::CodecError;
pub use error::{Result, StoreError};
pub use file::FlatFileStore;

/// How a store assigns identifiers to records saved without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// `"<prefix><N>"` identifiers from a counter seeded at store open with
    /// the highest existing suffix. Never reissues a number, never fills
    /// gaps left by deletions.
    Sequential {
        /// The identifier prefix, e.g. `"S"` for staff.
        prefix: &'static str,
    },

    /// Random UUID v4 tokens.
    Token,

    /// Time-ordered ULID tokens, so identifier order matches creation order.
    Timestamped,
}

/// A record that can live in a [`FlatFileStore`].
///
/// Implementations define the positional field layout of the persisted line
/// and how identifiers are assigned. [`Record::from_fields`] must treat any
/// single unparseable field as a failure of the whole line.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in log messages, e.g. `"member"`.
    const KIND: &'static str;

    /// Number of positional fields in the persisted form.
    const ARITY: usize;

    /// Identifier assignment for records saved without one.
    const ID_STRATEGY: IdStrategy;

    /// The record's identifier, if it has been assigned.
    fn id(&self) -> Option<&str>;

    /// Attach a store-assigned identifier.
    fn assign_id(&mut self, id: String);

    /// The record's fields in persisted order.
    fn to_fields(&self) -> Vec<String>;

    /// Rebuild a record from fields split out of one line.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the field count differs from
    /// [`Record::ARITY`] or any field fails its typed parse.
    fn from_fields(fields: Vec<String>) -> std::result::Result<Self, CodecError>;
}
