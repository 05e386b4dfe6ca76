//! Platform access for the studydesk admin dashboard.
//!
//! This crate provides:
//! - The closed set of platform roles (`Role`)
//! - Sessions resolved from an external identity provider (`Session`, `SessionId`)
//! - The identity provider seam (`IdentityProvider`) and an in-memory provider
//! - The role-gated access check (`AccessGuard`, `AccessDecision`)
//!
//! # Access Control Model
//!
//! Every protected entry point names exactly one required role. A request is
//! allowed only when its session carries that role; a missing session, a
//! missing role, or any other role is denied. The guard makes no distinction
//! visible to clients between "not logged in" and "wrong role".
//!
//! # Example
//!
//! ```
//! use studydesk_platform_access::{AccessDecision, AccessGuard, DenialReason, Role, Session, SessionId};
//! use studydesk_core::UserId;
//! use chrono::Duration;
//!
//! let guard = AccessGuard::new(Role::Admin);
//!
//! let admin = Session::new(
//!     SessionId::from("sess_admin"),
//!     UserId::new(),
//!     Some(Role::Admin),
//!     Duration::hours(1),
//! );
//! assert_eq!(guard.authorize(Some(&admin)), AccessDecision::Allow);
//!
//! assert_eq!(
//!     guard.authorize(None),
//!     AccessDecision::Deny(DenialReason::Unauthenticated),
//! );
//! ```

pub mod error;
pub mod guard;
pub mod identity;
pub mod role;
pub mod session;

pub use error::{AuthenticationError, AuthorizationError};
pub use guard::{AccessDecision, AccessGuard, DenialReason, authorize};
pub use identity::{IdentityProvider, InMemoryIdentityProvider, SessionLookup};
pub use role::{ParseRoleError, Role};
pub use session::{Session, SessionId};
