//! Per-route guard: render, wait, or redirect.
//!
//! A guard wraps one protected view. It holds no state across renders:
//! every call recomputes the decision from the session snapshot it is
//! given, so a session change (login, logout, token refresh) only requires
//! calling again.

use serde::{Deserialize, Serialize};

use crate::policy::{evaluate, Decision, DenyReason};
use crate::redirect::RedirectTarget;
use crate::requirement::RouteRequirement;
use crate::session::Session;

/// Guard evaluation state for one render pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "reason")]
pub enum GuardState {
    /// Session not yet resolved; the only initial state.
    Loading,
    /// Resolved and not authenticated.
    Unauthenticated,
    /// Access granted; render the wrapped view.
    Authorized,
    /// Authenticated but denied.
    Unauthorized(DenyReason),
}

/// What the rendering layer should do with a guard state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "target")]
pub enum GuardOutcome {
    /// Render a loading indicator; do not redirect yet.
    Wait,
    /// Render the wrapped view.
    Render,
    /// Navigate away.
    Redirect(RedirectTarget),
}

/// Guard for a single protected route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGuard {
    requirement: RouteRequirement,
}

impl RouteGuard {
    pub fn new(requirement: RouteRequirement) -> Self {
        Self { requirement }
    }

    pub fn requirement(&self) -> &RouteRequirement {
        &self.requirement
    }

    /// Evaluate the guard against a session snapshot.
    ///
    /// While the session is initializing the guard reports `Loading` and
    /// nothing else: redirecting during that window would bounce users to
    /// the login page before their stored session has been read.
    pub fn check(&self, session: &Session) -> GuardState {
        if session.is_initializing {
            return GuardState::Loading;
        }
        if !session.is_authenticated {
            return GuardState::Unauthenticated;
        }
        match evaluate(session, &self.requirement) {
            Decision::Allow => GuardState::Authorized,
            Decision::Deny(reason) => GuardState::Unauthorized(reason),
        }
    }

    /// Map a session snapshot straight to a rendering instruction.
    ///
    /// Both denial causes redirect to `/login`: an authenticated user with
    /// the wrong role is bounced to the login screen rather than a
    /// forbidden page. Known product quirk, preserved deliberately —
    /// introduce a distinct forbidden target only with product sign-off.
    pub fn outcome(&self, session: &Session) -> GuardOutcome {
        match self.check(session) {
            GuardState::Loading => GuardOutcome::Wait,
            GuardState::Authorized => GuardOutcome::Render,
            GuardState::Unauthenticated | GuardState::Unauthorized(_) => {
                GuardOutcome::Redirect(RedirectTarget::Login)
            }
        }
    }
}
