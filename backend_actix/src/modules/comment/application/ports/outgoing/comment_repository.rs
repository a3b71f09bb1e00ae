use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::{
    AddedComment, Comment, DeletedComment, RegisterComment,
};
use crate::shared::ownership_gate::AvailabilityProbe;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    NotFound,

    #[error("You are not the owner of this comment")]
    Forbidden,

    #[error("Constraint violated: {0}")]
    Invariant(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// `verify_availability` fails for comments that are missing *or* deleted.
#[async_trait]
pub trait CommentRepository: AvailabilityProbe {
    async fn add_comment(
        &self,
        comment: RegisterComment,
        owner: UserId,
        thread_id: Uuid,
    ) -> Result<AddedComment, CommentRepositoryError>;

    /// Returns deleted comments too; `NotFound` only when the row is absent.
    async fn get_comment(&self, comment_id: Uuid) -> Result<Comment, CommentRepositoryError>;

    /// Oldest first, deleted comments included.
    async fn get_comments(&self, thread_id: Uuid) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Checks ownership against the stored row before stamping `deleted_at`.
    /// An already deleted comment is `NotFound`.
    async fn delete_comment(
        &self,
        comment_id: Uuid,
        owner: UserId,
    ) -> Result<DeletedComment, CommentRepositoryError>;
}
