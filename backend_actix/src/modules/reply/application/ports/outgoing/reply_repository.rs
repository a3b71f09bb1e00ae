use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::reply::application::domain::entities::{AddedReply, DeletedReply, RegisterReply, Reply};
use crate::shared::ownership_gate::AvailabilityProbe;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReplyRepositoryError {
    #[error("Reply not found")]
    NotFound,

    #[error("You are not the owner of this reply")]
    Forbidden,

    #[error("Constraint violated: {0}")]
    Invariant(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReplyRepository: AvailabilityProbe {
    async fn add_reply(
        &self,
        reply: RegisterReply,
        owner: UserId,
        comment_id: Uuid,
    ) -> Result<AddedReply, ReplyRepositoryError>;

    async fn get_reply(&self, reply_id: Uuid) -> Result<Reply, ReplyRepositoryError>;

    /// Oldest first, deleted replies included.
    async fn get_replies(&self, comment_id: Uuid) -> Result<Vec<Reply>, ReplyRepositoryError>;

    async fn delete_reply(
        &self,
        reply_id: Uuid,
        owner: UserId,
    ) -> Result<DeletedReply, ReplyRepositoryError>;
}
