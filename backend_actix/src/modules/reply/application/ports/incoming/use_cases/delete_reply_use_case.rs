use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    reply::application::domain::entities::DeletedReply,
    shared::ownership_gate::{GateError, Resource},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteReplyError {
    #[error("{0} not found")]
    NotFound(Resource),

    #[error("You are not the owner of this reply")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<GateError> for DeleteReplyError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::NotFound(resource) => DeleteReplyError::NotFound(resource),
            GateError::Infrastructure(msg) => DeleteReplyError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteReplyUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        thread_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
    ) -> Result<DeletedReply, DeleteReplyError>;
}
