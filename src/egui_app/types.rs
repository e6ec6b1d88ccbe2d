/**
 * Shared Types Module
 *
 * Views the desktop shell can show.
 */

/// Current app view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Entry view with the login form
    Login,
    /// Article form and list; requires a session
    Articles,
}

impl AppView {
    /// Views that may only be entered with a token
    pub fn is_protected(&self) -> bool {
        matches!(self, AppView::Articles)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppView::Login => "Login",
            AppView::Articles => "Articles",
        }
    }
}
