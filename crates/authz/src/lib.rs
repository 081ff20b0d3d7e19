//! `stayops-authz` — pure access-policy and redirect-resolution boundary.
//!
//! This crate decides, for a session descriptor supplied by an external
//! session provider, (a) whether a requested view may render and (b) where a
//! freshly authenticated session should land. Every decision is a value:
//! no I/O, no shared mutable state, recomputed from scratch per render.
//!
//! Credential validation, token issuance, and session persistence are
//! intentionally outside this crate.

pub mod guard;
pub mod hierarchy;
pub mod policy;
pub mod provider;
pub mod redirect;
pub mod requirement;
pub mod role;
pub mod routes;
pub mod session;

pub use guard::{GuardOutcome, GuardState, RouteGuard};
pub use hierarchy::rank;
pub use policy::{evaluate, Decision, DenyReason};
pub use provider::{MemorySessionProvider, SessionProvider};
pub use redirect::{resolve_landing, RedirectTarget};
pub use requirement::RouteRequirement;
pub use role::{RoleName, RoleSet};
pub use routes::{RouteTable, RouteTableBuilder};
pub use session::Session;
