//! Article Data Structures
//!
//! Articles as the server returns them, the field set sent on create/update,
//! and the raw form values together with the validation policy that decides
//! whether a submission may be attempted at all.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::error::ClientError;

/// Server-assigned article identifier
pub type ArticleId = u64;

/// Minimum trimmed title length
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum title length
pub const TITLE_MAX_CHARS: usize = 50;
/// Minimum trimmed text length
pub const TEXT_MIN_CHARS: usize = 8;
/// Maximum text length
pub const TEXT_MAX_CHARS: usize = 200;

/// Fixed set of article topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    JavaScript,
    React,
    Node,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::JavaScript, Topic::React, Topic::Node];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::JavaScript => "JavaScript",
            Topic::React => "React",
            Topic::Node => "Node",
        }
    }

    /// Parse a form value; blank or unknown values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value.trim())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An article held in the local collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl Article {
    /// The editable fields of this article
    pub fn fields(&self) -> ArticleFields {
        ArticleFields {
            title: self.title.clone(),
            text: self.text.clone(),
            topic: self.topic,
        }
    }
}

/// Article body sent on create and update (never carries an id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFields {
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

/// Raw form values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    pub title: String,
    pub text: String,
    /// Empty until a topic is selected
    pub topic: String,
}

impl ArticleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with an existing article
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            text: article.text.clone(),
            topic: article.topic.as_str().to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the submit button is enabled
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Apply the validation policy, yielding the fields to send.
    ///
    /// Values are sent as typed; only the length checks look at the trimmed
    /// text.
    pub fn validate(&self) -> Result<ArticleFields, ClientError> {
        let title_len = self.title.trim().chars().count();
        if title_len < TITLE_MIN_CHARS {
            return Err(ClientError::validation(
                "title",
                format!("Title must be at least {} characters", TITLE_MIN_CHARS),
            ));
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(ClientError::validation(
                "title",
                format!("Title must be at most {} characters", TITLE_MAX_CHARS),
            ));
        }

        let text_len = self.text.trim().chars().count();
        if text_len < TEXT_MIN_CHARS {
            return Err(ClientError::validation(
                "text",
                format!("Text must be at least {} characters", TEXT_MIN_CHARS),
            ));
        }
        if self.text.chars().count() > TEXT_MAX_CHARS {
            return Err(ClientError::validation(
                "text",
                format!("Text must be at most {} characters", TEXT_MAX_CHARS),
            ));
        }

        let topic = Topic::parse(&self.topic)
            .ok_or_else(|| ClientError::validation("topic", "Select a topic"))?;

        Ok(ArticleFields {
            title: self.title.clone(),
            text: self.text.clone(),
            topic,
        })
    }
}
