//! Navigation guard for protected views.

use crate::egui_app::session::SessionStore;
use crate::egui_app::types::AppView;

/// Authentication state as seen by navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated,
}

/// Keeps unauthenticated users out of protected views.
///
/// The status depends only on whether the session store holds a token.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    session: SessionStore,
}

impl NavigationGuard {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    pub fn status(&self) -> AuthStatus {
        if self.session.is_authenticated() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }

    /// The view navigation actually lands on when `requested` is entered
    pub fn resolve(&self, requested: AppView) -> AppView {
        if requested.is_protected() && self.status() == AuthStatus::Unauthenticated {
            tracing::debug!("Blocked {:?} without a session", requested);
            AppView::Login
        } else {
            requested
        }
    }
}
