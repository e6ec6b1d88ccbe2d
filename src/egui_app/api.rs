//! Articles API Client
//!
//! Blocking HTTP client for the articles REST API. Every article operation
//! attaches the stored token as the `Authorization` header; when no token is
//! stored the call fails with `ClientError::Precondition` before anything is
//! sent. Calls block, so the UI always runs them on a worker thread.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::egui_app::config::Config;
use crate::egui_app::session::SessionStore;
use crate::shared::api::{
    ArticleResponse, ArticlesResponse, LoginRequest, LoginResponse, MessageResponse,
};
use crate::shared::article::{Article, ArticleFields, ArticleId};
use crate::shared::error::ClientError;

/// Operations offered by the articles backend
pub trait ArticlesApi: Send + Sync {
    /// Exchange credentials for a token
    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;

    fn fetch_articles(&self) -> Result<Vec<Article>, ClientError>;

    fn create_article(&self, fields: &ArticleFields) -> Result<Article, ClientError>;

    /// Fails with `NotFound` when the server does not know `id`
    fn update_article(&self, id: ArticleId, fields: &ArticleFields) -> Result<Article, ClientError>;

    fn delete_article(&self, id: ArticleId) -> Result<(), ClientError>;
}

/// reqwest implementation of [`ArticlesApi`]
pub struct HttpArticlesApi {
    config: Config,
    session: SessionStore,
    client: Client,
}

impl HttpArticlesApi {
    pub fn new(config: Config, session: SessionStore) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            config,
            session,
            client,
        })
    }

    fn token(&self) -> Result<String, ClientError> {
        self.session.current_token().ok_or(ClientError::Precondition)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<MessageResponse>()
            .ok()
            .and_then(|body| body.message);
        tracing::warn!(
            "Request failed: {} - {}",
            status,
            message.as_deref().unwrap_or("no message")
        );
        Err(ClientError::from_status(status.as_u16(), message))
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        response
            .json::<T>()
            .map_err(|e| ClientError::transport(format!("Failed to parse response: {}", e)))
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        Ok(request.header(reqwest::header::AUTHORIZATION, self.token()?))
    }
}

impl ArticlesApi for HttpArticlesApi {
    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let url = self.config.api_url("/login");
        tracing::debug!("POST {} as {}", url, request.username);

        let response = self.send(self.client.post(&url).json(request))?;
        Self::decode(response)
    }

    fn fetch_articles(&self) -> Result<Vec<Article>, ClientError> {
        let url = self.config.api_url("/articles");
        let request = self.authorized(self.client.get(&url))?;
        tracing::debug!("GET {}", url);

        let body: ArticlesResponse = Self::decode(self.send(request)?)?;
        Ok(body.articles)
    }

    fn create_article(&self, fields: &ArticleFields) -> Result<Article, ClientError> {
        let url = self.config.api_url("/articles");
        let request = self.authorized(self.client.post(&url))?.json(fields);
        tracing::debug!("POST {}", url);

        let body: ArticleResponse = Self::decode(self.send(request)?)?;
        Ok(body.article)
    }

    fn update_article(&self, id: ArticleId, fields: &ArticleFields) -> Result<Article, ClientError> {
        let url = self.config.api_url(&format!("/articles/{}", id));
        let request = self.authorized(self.client.put(&url))?.json(fields);
        tracing::debug!("PUT {}", url);

        let body: ArticleResponse = Self::decode(self.send(request)?)?;
        Ok(body.article)
    }

    fn delete_article(&self, id: ArticleId) -> Result<(), ClientError> {
        let url = self.config.api_url(&format!("/articles/{}", id));
        let request = self.authorized(self.client.delete(&url))?;
        tracing::debug!("DELETE {}", url);

        let response = self.send(request)?;
        if let Ok(body) = response.json::<MessageResponse>() {
            tracing::debug!("Delete acknowledged: {}", body.message.unwrap_or_default());
        }
        Ok(())
    }
}
