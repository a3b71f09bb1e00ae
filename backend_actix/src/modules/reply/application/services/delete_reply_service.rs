use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::ports::outgoing::CommentRepository,
    reply::application::{
        domain::entities::DeletedReply,
        ports::{
            incoming::use_cases::{DeleteReplyError, DeleteReplyUseCase},
            outgoing::{ReplyRepository, ReplyRepositoryError},
        },
    },
    shared::ownership_gate::{Lineage, Resource},
    thread::application::ports::outgoing::ThreadRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteReplyService<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    threads: T,
    comments: C,
    replies: R,
}

impl<T, C, R> DeleteReplyService<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    pub fn new(threads: T, comments: C, replies: R) -> Self {
        Self {
            threads,
            comments,
            replies,
        }
    }
}

#[async_trait]
impl<T, C, R> DeleteReplyUseCase for DeleteReplyService<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        thread_id: Uuid,
        comment_id: Uuid,
        reply_id: Uuid,
    ) -> Result<DeletedReply, DeleteReplyError> {
        Lineage::new()
            .then(&self.threads, thread_id)
            .then(&self.comments, comment_id)
            .then(&self.replies, reply_id)
            .guard(async {
                self.replies
                    .delete_reply(reply_id, owner)
                    .await
                    .map_err(|e| match e {
                        ReplyRepositoryError::NotFound => {
                            DeleteReplyError::NotFound(Resource::Reply)
                        }
                        ReplyRepositoryError::Forbidden => DeleteReplyError::Forbidden,
                        other => DeleteReplyError::RepositoryError(other.to_string()),
                    })
            })
            .await
    }
}
