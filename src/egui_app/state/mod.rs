use std::sync::Arc;

use crate::egui_app::api::{ArticlesApi, HttpArticlesApi};
use crate::egui_app::articles::ArticleController;
use crate::egui_app::guard::NavigationGuard;
use crate::egui_app::session::{FileStorage, MemoryStorage, SessionStore};
use crate::egui_app::{AppView, Config};
use crate::shared::error::ClientError;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub guard: NavigationGuard,
    pub controller: ArticleController,
    pub current_view: AppView,
    pub username_input: String,
    pub password_input: String,
}

impl AppState {
    /// Open the session store and build the HTTP client from `config`.
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let session = match config.session_path() {
            Some(path) => {
                tracing::info!("Session file: {}", path.display());
                SessionStore::open(FileStorage::new(path))
            }
            None => SessionStore::open(MemoryStorage::new()),
        };
        let api = HttpArticlesApi::new(config.clone(), session.clone())?;
        Ok(Self::with_parts(config, session, Arc::new(api)))
    }

    /// Assemble from an existing session store and backend
    pub fn with_parts(config: Config, session: SessionStore, api: Arc<dyn ArticlesApi>) -> Self {
        tracing::info!("AppState initialized against {}", config.server_url());
        Self {
            controller: ArticleController::new(api, session.clone()),
            guard: NavigationGuard::new(session.clone()),
            session,
            config,
            current_view: AppView::Login,
            username_input: String::new(),
            password_input: String::new(),
        }
    }

    /// Navigate through the guard. Entering the articles view reloads them.
    pub fn navigate(&mut self, requested: AppView) {
        let target = self.guard.resolve(requested);
        if target == self.current_view {
            return;
        }
        tracing::debug!("Navigating {:?} -> {:?}", self.current_view, target);
        self.current_view = target;
        if target == AppView::Articles {
            self.controller.refresh();
        }
    }

    /// Apply settled requests and redirects, then re-check the guard.
    /// Called once per frame.
    pub fn tick(&mut self) {
        self.controller.poll();

        if let Some(view) = self.controller.take_redirect() {
            if view == AppView::Articles {
                self.password_input.clear();
            }
            self.navigate(view);
        }

        let allowed = self.guard.resolve(self.current_view);
        if allowed != self.current_view {
            self.current_view = allowed;
        }
    }

    pub fn handle_login(&mut self) {
        let username = self.username_input.clone();
        let password = self.password_input.clone();
        if let Err(e) = self.controller.login(&username, &password) {
            tracing::debug!("Login not sent: {}", e);
        }
    }

    pub fn logout(&mut self) {
        self.controller.logout();
        self.username_input.clear();
        self.password_input.clear();
    }
}
