use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    reply::application::domain::entities::{AddedReply, RegisterReplyError},
    shared::ownership_gate::{GateError, Resource},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddReplyError {
    #[error(transparent)]
    InvalidPayload(#[from] RegisterReplyError),

    #[error("{0} not found")]
    NotFound(Resource),

    #[error("Constraint violated: {0}")]
    Invariant(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<GateError> for AddReplyError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::NotFound(resource) => AddReplyError::NotFound(resource),
            GateError::Infrastructure(msg) => AddReplyError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait AddReplyUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        thread_id: Uuid,
        comment_id: Uuid,
        content: String,
    ) -> Result<AddedReply, AddReplyError>;
}
