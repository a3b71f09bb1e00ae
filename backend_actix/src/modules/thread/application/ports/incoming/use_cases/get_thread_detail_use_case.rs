use async_trait::async_trait;
use uuid::Uuid;

use crate::thread::application::domain::entities::ThreadDetail;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetThreadDetailError {
    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetThreadDetailUseCase: Send + Sync {
    async fn execute(&self, thread_id: Uuid) -> Result<ThreadDetail, GetThreadDetailError>;
}
