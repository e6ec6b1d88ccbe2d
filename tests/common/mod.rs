//! Common test utilities and helpers
//!
//! - A wiremock backend driven from synchronous tests
//! - Session and article fixtures
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;

use std::sync::Arc;

use articles_desk::egui_app::{
    ArticleController, Config, HttpArticlesApi, MemoryStorage, Session, SessionStore,
};
use articles_desk::shared::{AppConfig, Article, Topic};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

/// Fake articles server.
///
/// The client under test blocks, so tests stay synchronous and only enter
/// the runtime to drive wiremock itself.
pub struct TestBackend {
    server: MockServer,
    runtime: Runtime,
}

impl TestBackend {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("test runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// API base endpoint of the fake server
    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    pub fn received(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn config(&self) -> Config {
        Config::with_builder(
            AppConfig::builder()
                .server_url(self.base_url())
                .in_memory_session(),
        )
        .expect("valid test config")
    }

    pub fn api(&self, session: &SessionStore) -> HttpArticlesApi {
        HttpArticlesApi::new(self.config(), session.clone()).expect("http client")
    }

    pub fn controller(&self, session: &SessionStore) -> ArticleController {
        ArticleController::new(Arc::new(self.api(session)), session.clone())
    }
}

/// Session store already holding bob's token
pub fn bob_session() -> SessionStore {
    SessionStore::open(MemoryStorage::with_session(Session {
        token: Some("abc".to_string()),
        username: Some("bob".to_string()),
    }))
}

pub fn logged_out_session() -> SessionStore {
    SessionStore::open(MemoryStorage::new())
}

pub fn article(id: u64, title: &str) -> Article {
    Article {
        article_id: id,
        title: title.to_string(),
        text: format!("{} explained in detail", title),
        topic: Topic::JavaScript,
    }
}

/// `GET /articles` success body
pub fn articles_body(articles: &[Article]) -> serde_json::Value {
    json!({ "message": "Here are the articles", "articles": articles })
}

/// `POST`/`PUT` success body
pub fn article_body(article: &Article) -> serde_json::Value {
    json!({ "message": "Article saved", "article": article })
}

pub fn message_body(message: &str) -> serde_json::Value {
    json!({ "message": message })
}
