//! Session provider boundary.
//!
//! The provider owns the session lifecycle: it resolves stored credentials
//! on startup, swaps the session on login/logout/profile change, and
//! surfaces session expiry to the UI. This crate only defines the seam and
//! an in-memory implementation for tests and embedders.

use std::sync::RwLock;

use crate::session::Session;

/// Source of session snapshots.
///
/// `clear_session_expired` is the hook point for the expired-session
/// notice: the dialog itself lives in the UI layer and calls back through
/// this trait once the user acknowledges it.
pub trait SessionProvider: Send + Sync {
    /// Current session snapshot. Callers must re-request after any
    /// authentication transition rather than caching the value.
    fn session(&self) -> Session;

    /// Acknowledge an expired-session notice.
    fn clear_session_expired(&self);
}

/// In-memory session provider.
///
/// Starts in the initializing state, like a real provider reading stored
/// credentials. Logout tears the session down to anonymous, which also
/// drops the tenant binding.
pub struct MemorySessionProvider {
    state: RwLock<ProviderState>,
}

struct ProviderState {
    session: Session,
    session_expired: bool,
}

impl MemorySessionProvider {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ProviderState {
                session: Session::initializing(),
                session_expired: false,
            }),
        }
    }

    /// Complete initial load without an authenticated user.
    pub fn resolve_anonymous(&self) {
        self.replace(Session::anonymous());
    }

    /// Install an authenticated session (login success or token refresh).
    pub fn login(&self, session: Session) {
        tracing::debug!(
            tenant_id = session.tenant_id.as_ref().map(|t| t.as_str()),
            roles = ?session.effective_roles(),
            "session_installed"
        );
        self.replace(session);
    }

    /// Tear the session down to anonymous.
    pub fn logout(&self) {
        tracing::debug!("session_cleared");
        self.replace(Session::anonymous());
    }

    /// Flag the current session as expired. The session itself is torn
    /// down; the flag stays set until the user acknowledges the notice.
    pub fn mark_expired(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.session = Session::anonymous();
        state.session_expired = true;
    }

    pub fn session_expired(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .session_expired
    }

    fn replace(&self, session: Session) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.session = session;
    }
}

impl Default for MemorySessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for MemorySessionProvider {
    fn session(&self) -> Session {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .session
            .clone()
    }

    fn clear_session_expired(&self) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .session_expired = false;
    }
}
