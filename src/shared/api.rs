//! Wire types for the articles REST API
//!
//! Every response body carries a `message`; success bodies add the payload.

use serde::{Deserialize, Serialize};

use crate::shared::article::Article;

/// `POST /login` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /login` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
}

/// `GET /articles` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub articles: Vec<Article>,
}

/// `POST /articles` and `PUT /articles/:id` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub article: Article,
}

/// `DELETE /articles/:id` success body, and the body of any failure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
