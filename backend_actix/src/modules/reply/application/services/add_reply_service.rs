use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::ports::outgoing::CommentRepository,
    reply::application::{
        domain::entities::{AddedReply, RegisterReply},
        ports::{
            incoming::use_cases::{AddReplyError, AddReplyUseCase},
            outgoing::{ReplyRepository, ReplyRepositoryError},
        },
    },
    shared::ownership_gate::{Lineage, Resource},
    thread::application::ports::outgoing::ThreadRepository,
};

#[derive(Debug, Clone)]
pub struct AddReplyService<T, C, R>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
{
    threads: T,
    comments: C,
    replies: R,
}

impl<T, C, R> AddReplyService<T, C, R>
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
impl<T, C, R> AddReplyUseCase for AddReplyService<T, C, R>
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
        content: String,
    ) -> Result<AddedReply, AddReplyError> {
        let reply = RegisterReply::new(content)?;

        Lineage::new()
            .then(&self.threads, thread_id)
            .then(&self.comments, comment_id)
            .guard(async {
                self.replies
                    .add_reply(reply, owner, comment_id)
                    .await
                    .map_err(|e| match e {
                        ReplyRepositoryError::Invariant(msg) => AddReplyError::Invariant(msg),
                        ReplyRepositoryError::NotFound => AddReplyError::NotFound(Resource::Reply),
                        other => AddReplyError::RepositoryError(other.to_string()),
                    })
            })
            .await
    }
}
