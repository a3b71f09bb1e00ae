use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::{
        domain::entities::{AddedComment, RegisterComment},
        ports::{
            incoming::use_cases::{AddCommentError, AddCommentUseCase},
            outgoing::{CommentRepository, CommentRepositoryError},
        },
    },
    shared::ownership_gate::{Lineage, Resource},
    thread::application::ports::outgoing::ThreadRepository,
};

#[derive(Debug, Clone)]
pub struct AddCommentService<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    threads: T,
    comments: C,
}

impl<T, C> AddCommentService<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    pub fn new(threads: T, comments: C) -> Self {
        Self { threads, comments }
    }
}

fn map_repository_error(err: CommentRepositoryError) -> AddCommentError {
    match err {
        CommentRepositoryError::Invariant(msg) => AddCommentError::Invariant(msg),
        CommentRepositoryError::NotFound => AddCommentError::NotFound(Resource::Comment),
        other => AddCommentError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<T, C> AddCommentUseCase for AddCommentService<T, C>
where
    T: ThreadRepository,
    C: CommentRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        thread_id: Uuid,
        content: String,
    ) -> Result<AddedComment, AddCommentError> {
        let comment = RegisterComment::new(content)?;

        Lineage::new()
            .then(&self.threads, thread_id)
            .guard(async {
                self.comments
                    .add_comment(comment, owner, thread_id)
                    .await
                    .map_err(map_repository_error)
            })
            .await
    }
}
