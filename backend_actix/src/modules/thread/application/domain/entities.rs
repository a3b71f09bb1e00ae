use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const TITLE_MAX: usize = 150;

/// Validated payload for a new thread.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterThread {
    title: String,
    body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterThreadError {
    #[error("Thread title cannot be empty")]
    EmptyTitle,
    #[error("Thread title must be at most 150 characters")]
    TitleTooLong,
    #[error("Thread body cannot be empty")]
    EmptyBody,
}

impl RegisterThread {
    pub fn new(title: String, body: String) -> Result<Self, RegisterThreadError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RegisterThreadError::EmptyTitle);
        }
        if title.chars().count() > TITLE_MAX {
            return Err(RegisterThreadError::TitleTooLong);
        }

        let body = body.trim();
        if body.is_empty() {
            return Err(RegisterThreadError::EmptyBody);
        }

        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AddedThread {
    pub id: Uuid,
    #[schema(example = "Belajar Rust")]
    pub title: String,
    #[schema(value_type = String, format = Uuid)]
    pub owner: UserId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Read model for GET /threads/{id}
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ThreadDetail {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

/// `content` already carries the placeholder when the comment is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommentDetail {
    pub id: Uuid,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub replies: Vec<ReplyDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReplyDetail {
    pub id: Uuid,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}
