use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::domain::entities::{AddedComment, RegisterCommentError},
    shared::ownership_gate::{GateError, Resource},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddCommentError {
    #[error(transparent)]
    InvalidPayload(#[from] RegisterCommentError),

    #[error("{0} not found")]
    NotFound(Resource),

    #[error("Constraint violated: {0}")]
    Invariant(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<GateError> for AddCommentError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::NotFound(resource) => AddCommentError::NotFound(resource),
            GateError::Infrastructure(msg) => AddCommentError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        thread_id: Uuid,
        content: String,
    ) -> Result<AddedComment, AddCommentError>;
}
