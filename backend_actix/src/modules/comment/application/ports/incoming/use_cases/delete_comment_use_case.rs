use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::domain::entities::DeletedComment,
    shared::ownership_gate::{GateError, Resource},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("{0} not found")]
    NotFound(Resource),

    #[error("You are not the owner of this comment")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<GateError> for DeleteCommentError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::NotFound(resource) => DeleteCommentError::NotFound(resource),
            GateError::Infrastructure(msg) => DeleteCommentError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        thread_id: Uuid,
        comment_id: Uuid,
    ) -> Result<DeletedComment, DeleteCommentError>;
}
