use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const DELETED_REPLY_PLACEHOLDER: &str = "[reply deleted]";

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterReply {
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterReplyError {
    #[error("Reply content cannot be empty")]
    EmptyContent,
}

impl RegisterReply {
    pub fn new(content: String) -> Result<Self, RegisterReplyError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(RegisterReplyError::EmptyContent);
        }

        Ok(Self {
            content: content.to_string(),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    Active,
    Deleted { at: DateTime<Utc> },
}

impl From<Option<DateTime<Utc>>> for ReplyState {
    fn from(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            Some(at) => ReplyState::Deleted { at },
            None => ReplyState::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: Uuid,
    pub owner: UserId,
    pub comment_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub state: ReplyState,
}

impl Reply {
    pub fn is_deleted(&self) -> bool {
        matches!(self.state, ReplyState::Deleted { .. })
    }

    pub fn display_content(&self) -> &str {
        match self.state {
            ReplyState::Active => &self.content,
            ReplyState::Deleted { .. } => DELETED_REPLY_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AddedReply {
    pub id: Uuid,
    #[schema(example = "Sebuah balasan")]
    pub content: String,
    #[schema(value_type = String, format = Uuid)]
    pub owner: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedReply {
    pub is_deleted: bool,
    pub deleted_at: DateTime<Utc>,
}
