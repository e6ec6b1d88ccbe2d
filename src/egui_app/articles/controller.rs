//! Article State Controller
//!
//! Owns the session's article collection, the edit target, the article form
//! and the feedback line. Requests run on worker threads; their results come
//! back over a channel and are applied one at a time by [`ArticleController::poll`]
//! on the UI thread, so state is only ever mutated from one place.
//!
//! Late results are applied to whatever state exists when they arrive.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use crate::egui_app::api::ArticlesApi;
use crate::egui_app::feedback::FeedbackState;
use crate::egui_app::session::{Session, SessionStore};
use crate::egui_app::types::AppView;
use crate::shared::article::{Article, ArticleForm, ArticleId};
use crate::shared::error::ClientError;

const LOGIN_FAILED: &str = "An error occurred. Please try again";
const FETCH_FAILED: &str = "Problems getting articles";
const CREATE_FAILED: &str = "An error occurred while posting the article";
const UPDATE_FAILED: &str = "An error occurred while updating the article";
const DELETE_FAILED: &str = "An error occurred while deleting the article";
const WORKER_FAILED: &str = "An unexpected error occurred. Please try again";

/// Result of a request, delivered back to the UI thread
enum Settled {
    LoggedIn(Result<Session, ClientError>),
    Fetched(Result<Vec<Article>, ClientError>),
    Created(Result<Article, ClientError>),
    Updated {
        id: ArticleId,
        result: Result<Article, ClientError>,
    },
    Deleted {
        id: ArticleId,
        result: Result<(), ClientError>,
    },
    /// The worker panicked before producing a result
    Aborted(&'static str),
}

pub struct ArticleController {
    api: Arc<dyn ArticlesApi>,
    session: SessionStore,
    articles: Vec<Article>,
    edit_target: Option<ArticleId>,
    /// Values bound to the article form
    pub form: ArticleForm,
    feedback: FeedbackState,
    redirect: Option<AppView>,
    tx: Sender<Settled>,
    rx: Receiver<Settled>,
}

impl ArticleController {
    pub fn new(api: Arc<dyn ArticlesApi>, session: SessionStore) -> Self {
        let (tx, rx) = channel();
        Self {
            api,
            session,
            articles: Vec::new(),
            edit_target: None,
            form: ArticleForm::new(),
            feedback: FeedbackState::new(),
            redirect: None,
            tx,
            rx,
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn edit_target(&self) -> Option<ArticleId> {
        self.edit_target
    }

    /// The article loaded into the form, if it is still in the collection
    pub fn editing_article(&self) -> Option<&Article> {
        self.edit_target
            .and_then(|id| self.articles.iter().find(|a| a.article_id == id))
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    pub fn message(&self) -> &str {
        self.feedback.message()
    }

    pub fn is_busy(&self) -> bool {
        self.feedback.busy()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Navigation requested by the last applied result, if any
    pub fn take_redirect(&mut self) -> Option<AppView> {
        self.redirect.take()
    }

    fn username(&self) -> String {
        self.session
            .current_username()
            .unwrap_or_else(|| "friend".to_string())
    }

    /// Run `job` on a worker thread. Busy is raised here and lowered when the
    /// result is applied, including when the worker panics.
    fn spawn<F>(&mut self, label: &'static str, job: F)
    where
        F: FnOnce(&dyn ArticlesApi) -> Settled + Send + 'static,
    {
        self.feedback.begin();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tracing::debug!("Starting {}", label);

        std::thread::spawn(move || {
            let settled = panic::catch_unwind(AssertUnwindSafe(|| job(api.as_ref())))
                .unwrap_or(Settled::Aborted(label));
            let _ = tx.send(settled);
        });
    }

    /// Log in and, on success, navigate to the articles view.
    ///
    /// Blank credentials are rejected without a request.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        if username.trim().is_empty() || password.is_empty() {
            let error = ClientError::validation("username", "Username and password are required");
            self.feedback.set_message(error.feedback(LOGIN_FAILED));
            return Err(error);
        }

        self.feedback.clear_message();
        let session = self.session.clone();
        let username = username.trim().to_string();
        let password = password.to_string();
        self.spawn("login", move |api| {
            Settled::LoggedIn(session.login(api, &username, &password))
        });
        Ok(())
    }

    /// End the session and return to the login view
    pub fn logout(&mut self) {
        self.session.logout();
        self.reset_session_state();
        self.feedback.set_message("Goodbye!");
        self.redirect = Some(AppView::Login);
    }

    /// Reload the whole collection from the server
    pub fn refresh(&mut self) {
        self.spawn("fetch articles", |api| Settled::Fetched(api.fetch_articles()));
    }

    /// Send the form: update when an edit target is set, create otherwise.
    ///
    /// An invalid form never reaches the server; the UI keeps the submit
    /// button disabled in that case.
    pub fn submit(&mut self) -> Result<(), ClientError> {
        let fields = self.form.validate()?;

        match self.edit_target {
            Some(id) => self.spawn("update article", move |api| Settled::Updated {
                id,
                result: api.update_article(id, &fields),
            }),
            None => self.spawn("create article", move |api| {
                Settled::Created(api.create_article(&fields))
            }),
        }
        Ok(())
    }

    pub fn remove(&mut self, id: ArticleId) {
        self.spawn("delete article", move |api| Settled::Deleted {
            id,
            result: api.delete_article(id),
        });
    }

    /// Load an article into the form. Returns false when `id` is not in the
    /// collection.
    pub fn begin_edit(&mut self, id: ArticleId) -> bool {
        match self.articles.iter().find(|a| a.article_id == id) {
            Some(article) => {
                self.form = ArticleForm::from_article(article);
                self.edit_target = Some(id);
                true
            }
            None => {
                tracing::warn!("Cannot edit unknown article {}", id);
                false
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.form.clear();
    }

    /// Apply every result that has arrived. Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(settled) = self.rx.try_recv() {
            self.apply(settled);
            applied += 1;
        }
        applied
    }

    /// Wait for every outstanding request and apply the results.
    pub fn block_until_idle(&mut self) {
        while self.feedback.busy() {
            match self.rx.recv() {
                Ok(settled) => self.apply(settled),
                Err(_) => break,
            }
        }
    }

    fn apply(&mut self, settled: Settled) {
        self.feedback.settle();

        match settled {
            Settled::LoggedIn(Ok(session)) => {
                tracing::info!(
                    "Login successful for {}",
                    session.username.as_deref().unwrap_or_default()
                );
                self.feedback.set_message("Login successful!");
                self.redirect = Some(AppView::Articles);
            }
            Settled::LoggedIn(Err(e)) => {
                tracing::warn!("Login failed: {}", e);
                self.feedback.set_message(e.feedback(LOGIN_FAILED));
            }

            Settled::Fetched(Ok(_)) if !self.session.is_authenticated() => {
                tracing::debug!("Dropping articles fetched for an ended session");
            }
            Settled::Fetched(Ok(articles)) => {
                tracing::info!("Fetched {} articles", articles.len());
                self.articles = articles;
                if self.edit_target.is_some() && self.editing_article().is_none() {
                    self.cancel_edit();
                }
                let message = match self.articles.len() {
                    0 => "No articles found".to_string(),
                    1 => format!("Here is your 1 article, {}!", self.username()),
                    n => format!("Here are your {} articles, {}!", n, self.username()),
                };
                self.feedback.set_message(message);
            }
            Settled::Fetched(Err(e)) => self.fail(e, FETCH_FAILED),

            Settled::Created(Ok(article)) => {
                tracing::info!("Created article {}", article.article_id);
                // a refresh that overlapped the create may already hold it
                self.articles.retain(|a| a.article_id != article.article_id);
                self.articles.push(article);
                self.cancel_edit();
                let message = format!("Well done, {}. Great article!", self.username());
                self.feedback.set_message(message);
            }
            Settled::Created(Err(e)) => self.fail(e, CREATE_FAILED),

            Settled::Updated { id, result: Ok(article) } => {
                tracing::info!("Updated article {}", id);
                if let Some(slot) = self.articles.iter_mut().find(|a| a.article_id == id) {
                    *slot = article;
                }
                self.cancel_edit();
                let message = format!("Nice update, {}!", self.username());
                self.feedback.set_message(message);
            }
            Settled::Updated { result: Err(e), .. } => self.fail(e, UPDATE_FAILED),

            Settled::Deleted { id, result: Ok(()) } => {
                tracing::info!("Deleted article {}", id);
                self.articles.retain(|a| a.article_id != id);
                if self.edit_target == Some(id) {
                    self.cancel_edit();
                }
                let message = format!("Article {} was deleted, {}!", id, self.username());
                self.feedback.set_message(message);
            }
            Settled::Deleted { result: Err(e), .. } => self.fail(e, DELETE_FAILED),

            Settled::Aborted(label) => {
                tracing::error!("Worker for {} panicked", label);
                self.feedback.set_message(WORKER_FAILED);
            }
        }
    }

    /// Turn a failed article request into feedback. A rejected token ends the
    /// session and redirects without a message.
    fn fail(&mut self, error: ClientError, fallback: &str) {
        if error.is_unauthorized() {
            tracing::warn!("Token rejected, ending session: {}", error);
            self.session.clear();
            self.reset_session_state();
            self.feedback.clear_message();
            self.redirect = Some(AppView::Login);
            return;
        }

        tracing::error!("Request failed: {}", error);
        self.feedback.set_message(error.feedback(fallback));
    }

    fn reset_session_state(&mut self) {
        self.articles.clear();
        self.cancel_edit();
    }
}
