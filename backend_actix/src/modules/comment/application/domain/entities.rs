use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const DELETED_COMMENT_PLACEHOLDER: &str = "[comment deleted]";

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterComment {
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterCommentError {
    #[error("Comment content cannot be empty")]
    EmptyContent,
}

impl RegisterComment {
    pub fn new(content: String) -> Result<Self, RegisterCommentError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(RegisterCommentError::EmptyContent);
        }

        Ok(Self {
            content: content.to_string(),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentState {
    Active,
    Deleted { at: DateTime<Utc> },
}

impl From<Option<DateTime<Utc>>> for CommentState {
    fn from(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            Some(at) => CommentState::Deleted { at },
            None => CommentState::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub owner: UserId,
    pub thread_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub state: CommentState,
}

impl Comment {
    pub fn is_deleted(&self) -> bool {
        matches!(self.state, CommentState::Deleted { .. })
    }

    pub fn display_content(&self) -> &str {
        match self.state {
            CommentState::Active => &self.content,
            CommentState::Deleted { .. } => DELETED_COMMENT_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AddedComment {
    pub id: Uuid,
    #[schema(example = "Sebuah komentar")]
    pub content: String,
    #[schema(value_type = String, format = Uuid)]
    pub owner: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedComment {
    pub is_deleted: bool,
    pub deleted_at: DateTime<Utc>,
}
