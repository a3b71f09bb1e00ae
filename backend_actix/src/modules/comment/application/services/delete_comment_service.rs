use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::DeletedComment,
        ports::{
            incoming::use_cases::{DeleteCommentError, DeleteCommentUseCase},
            outgoing::{CommentRepository, CommentRepositoryError},
        },
    },
    shared::ownership_gate::{Lineage, Resource},
    thread::application::ports::outgoing::ThreadRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteCommentService<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    threads: T,
    comments: C,
}

impl<T, C> DeleteCommentService<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    pub fn new(threads: T, comments: C) -> Self {
        Self { threads, comments }
    }
}

#[async_trait]
impl<T, C> DeleteCommentUseCase for DeleteCommentService<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        thread_id: Uuid,
        comment_id: Uuid,
    ) -> Result<DeletedComment, DeleteCommentError> {
        Lineage::new()
            .then(&self.threads, thread_id)
            .then(&self.comments, comment_id)
            .guard(async {
                self.comments
                    .delete_comment(comment_id, owner)
                    .await
                    .map_err(|e| match e {
                        CommentRepositoryError::NotFound => {
                            DeleteCommentError::NotFound(Resource::Comment)
                        }
                        CommentRepositoryError::Forbidden => DeleteCommentError::Forbidden,
                        other => DeleteCommentError::RepositoryError(other.to_string()),
                    })
            })
            .await
    }
}
