use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::warn;
use uuid::Uuid;

use crate::{
    auth::application::{domain::entities::UserId, ports::outgoing::UserQuery},
    comment::application::ports::outgoing::CommentRepository,
    reply::application::{domain::entities::Reply, ports::outgoing::ReplyRepository},
    thread::application::{
        domain::entities::{CommentDetail, ReplyDetail, ThreadDetail},
        ports::{
            incoming::use_cases::{GetThreadDetailError, GetThreadDetailUseCase},
            outgoing::{ThreadRepository, ThreadRepositoryError},
        },
    },
};

const UNKNOWN_USERNAME: &str = "[unknown user]";

/// Assembles a thread with its comments and their replies. Deleted children
/// stay in place with placeholder content so the reply tree keeps its shape.
#[derive(Debug, Clone)]
pub struct GetThreadDetailService<T, C, R, U>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
    U: UserQuery,
{
    threads: T,
    comments: C,
    replies: R,
    users: U,
}

impl<T, C, R, U> GetThreadDetailService<T, C, R, U>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
    U: UserQuery,
{
    pub fn new(threads: T, comments: C, replies: R, users: U) -> Self {
        Self {
            threads,
            comments,
            replies,
            users,
        }
    }
}

fn username_of(names: &HashMap<Uuid, String>, owner: UserId) -> String {
    match names.get(&owner.value()) {
        Some(name) => name.clone(),
        None => {
            warn!(owner = %owner, "Owner has no user row");
            UNKNOWN_USERNAME.to_string()
        }
    }
}

#[async_trait]
impl<T, C, R, U> GetThreadDetailUseCase for GetThreadDetailService<T, C, R, U>
where
    T: ThreadRepository,
    C: CommentRepository,
    R: ReplyRepository,
    U: UserQuery,
{
    async fn execute(&self, thread_id: Uuid) -> Result<ThreadDetail, GetThreadDetailError> {
        let thread = self
            .threads
            .get_thread(thread_id)
            .await
            .map_err(|e| match e {
                ThreadRepositoryError::NotFound => GetThreadDetailError::ThreadNotFound,
                other => GetThreadDetailError::RepositoryError(other.to_string()),
            })?;

        let comments = self
            .comments
            .get_comments(thread_id)
            .await
            .map_err(|e| GetThreadDetailError::RepositoryError(e.to_string()))?;

        let replies: Vec<Vec<Reply>> =
            try_join_all(comments.iter().map(|c| self.replies.get_replies(c.id)))
                .await
                .map_err(|e| GetThreadDetailError::RepositoryError(e.to_string()))?;

        let owners: Vec<Uuid> = std::iter::once(thread.owner)
            .chain(comments.iter().map(|c| c.owner))
            .chain(replies.iter().flatten().map(|r| r.owner))
            .map(|owner| owner.value())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let names = self
            .users
            .find_usernames(&owners)
            .await
            .map_err(|e| GetThreadDetailError::RepositoryError(e.to_string()))?;

        let comments = comments
            .iter()
            .zip(replies)
            .map(|(comment, replies)| CommentDetail {
                id: comment.id,
                username: username_of(&names, comment.owner),
                date: comment.created_at,
                content: comment.display_content().to_string(),
                replies: replies
                    .iter()
                    .map(|reply| ReplyDetail {
                        id: reply.id,
                        username: username_of(&names, reply.owner),
                        date: reply.created_at,
                        content: reply.display_content().to_string(),
                    })
                    .collect(),
            })
            .collect();

        Ok(ThreadDetail {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.created_at,
            username: username_of(&names, thread.owner),
            comments,
        })
    }
}
