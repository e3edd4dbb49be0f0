//! Entity services for fitdesk.
//!
//! This crate layers validation and business rules over the flat-file
//! stores: member registration and login, staff administration with the
//! last-admin guard, the membership-plan catalog, member feedback and
//! payment tracking. Passwords are stored as salted argon2 hashes and
//! verified on login; raw passwords never reach the storage layer.
//!
//! There is no HTTP surface here. The embedding presentation layer
//! authenticates its users however it likes and passes the resulting
//! [`Actor`](fitdesk_core::Actor) into each privileged call.
//!
//! # Example
//!
//! ```no_run
//! use fitdesk_core::NewMember;
//! use fitdesk_service::{App, Config};
//!
//! # fn main() -> fitdesk_service::Result<()> {
//! let app = App::open(Config::from_env())?;
//! app.ensure_admin()?;
//!
//! let member = app.members.register(NewMember {
//!     name: "Ada Jones".to_string(),
//!     email: "ada@example.com".to_string(),
//!     password: "correct horse".to_string(),
//!     phone: "555-0199".to_string(),
//!     plan_id: None,
//! })?;
//! println!("registered {}", member.email);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod access;
mod input;

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod feedback;
pub mod members;
pub mod password;
pub mod payments;
pub mod plans;
pub mod staff;
pub mod state;

pub use bootstrap::ensure_admin;
pub use config::{AdminSeed, Config};
pub use error::{Result, ServiceError};
pub use feedback::FeedbackService;
pub use members::MemberService;
pub use payments::PaymentService;
pub use plans::PlanService;
pub use staff::StaffService;
pub use state::App;
