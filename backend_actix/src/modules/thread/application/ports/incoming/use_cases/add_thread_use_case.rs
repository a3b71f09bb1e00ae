use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    thread::application::domain::entities::{AddedThread, RegisterThreadError},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddThreadError {
    #[error(transparent)]
    InvalidPayload(#[from] RegisterThreadError),

    #[error("Constraint violated: {0}")]
    Invariant(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddThreadUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        title: String,
        body: String,
    ) -> Result<AddedThread, AddThreadError>;
}
