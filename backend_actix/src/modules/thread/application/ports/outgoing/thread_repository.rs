use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::ownership_gate::AvailabilityProbe;
use crate::thread::application::domain::entities::{AddedThread, RegisterThread, Thread};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThreadRepositoryError {
    #[error("Thread not found")]
    NotFound,

    /// Storage rejected the row (unique, not-null or foreign key constraint).
    #[error("Constraint violated: {0}")]
    Invariant(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Threads are never deleted, so availability is plain existence.
#[async_trait]
pub trait ThreadRepository: AvailabilityProbe {
    async fn add_thread(
        &self,
        thread: RegisterThread,
        owner: UserId,
    ) -> Result<AddedThread, ThreadRepositoryError>;

    async fn get_thread(&self, thread_id: Uuid) -> Result<Thread, ThreadRepositoryError>;
}
