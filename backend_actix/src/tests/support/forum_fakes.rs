//! In-memory repositories for service tests. Each clone shares the same rows,
//! so a test can keep a handle and inspect state after the service ran.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::comment::application::domain::entities::{
    AddedComment, Comment, CommentState, DeletedComment, RegisterComment,
};
use crate::comment::application::ports::outgoing::{CommentRepository, CommentRepositoryError};
use crate::reply::application::domain::entities::{
    AddedReply, DeletedReply, RegisterReply, Reply, ReplyState,
};
use crate::reply::application::ports::outgoing::{ReplyRepository, ReplyRepositoryError};
use crate::shared::ownership_gate::{AvailabilityError, AvailabilityProbe, Resource};
use crate::thread::application::domain::entities::{AddedThread, RegisterThread, Thread};
use crate::thread::application::ports::outgoing::{ThreadRepository, ThreadRepositoryError};

// Rows get strictly increasing timestamps so ordering assertions are stable.
fn tick(len: usize) -> chrono::DateTime<Utc> {
    Utc::now() + Duration::milliseconds(len as i64)
}

// ─── Threads ────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryThreads {
    rows: Arc<Mutex<Vec<Thread>>>,
}

impl InMemoryThreads {
    pub fn seed(&self, owner: UserId) -> Uuid {
        let mut rows = self.rows.lock().unwrap();
        let id = Uuid::new_v4();
        let created_at = tick(rows.len());
        rows.push(Thread {
            id,
            owner,
            title: "seeded thread".to_string(),
            body: "seeded body".to_string(),
            created_at,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AvailabilityProbe for InMemoryThreads {
    fn resource(&self) -> Resource {
        Resource::Thread
    }

    async fn verify_availability(&self, id: Uuid) -> Result<(), AvailabilityError> {
        let rows = self.rows.lock().unwrap();
        if rows.iter().any(|t| t.id == id) {
            Ok(())
        } else {
            Err(AvailabilityError::NotFound)
        }
    }
}

#[async_trait]
impl ThreadRepository for InMemoryThreads {
    async fn add_thread(
        &self,
        thread: RegisterThread,
        owner: UserId,
    ) -> Result<AddedThread, ThreadRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let id = Uuid::new_v4();
        let created_at = tick(rows.len());
        rows.push(Thread {
            id,
            owner,
            title: thread.title().to_string(),
            body: thread.body().to_string(),
            created_at,
        });

        Ok(AddedThread {
            id,
            title: thread.title().to_string(),
            owner,
        })
    }

    async fn get_thread(&self, thread_id: Uuid) -> Result<Thread, ThreadRepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == thread_id)
            .cloned()
            .ok_or(ThreadRepositoryError::NotFound)
    }
}

// ─── Comments ───────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryComments {
    rows: Arc<Mutex<Vec<Comment>>>,
}

impl InMemoryComments {
    pub fn seed(&self, owner: UserId, thread_id: Uuid, content: &str) -> Uuid {
        let mut rows = self.rows.lock().unwrap();
        let id = Uuid::new_v4();
        let created_at = tick(rows.len());
        rows.push(Comment {
            id,
            owner,
            thread_id,
            content: content.to_string(),
            created_at,
            state: CommentState::Active,
        });
        id
    }

    pub fn find(&self, id: Uuid) -> Option<Comment> {
        self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }
}

#[async_trait]
impl AvailabilityProbe for InMemoryComments {
    fn resource(&self) -> Resource {
        Resource::Comment
    }

    async fn verify_availability(&self, id: Uuid) -> Result<(), AvailabilityError> {
        match self.find(id) {
            Some(comment) if !comment.is_deleted() => Ok(()),
            _ => Err(AvailabilityError::NotFound),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn add_comment(
        &self,
        comment: RegisterComment,
        owner: UserId,
        thread_id: Uuid,
    ) -> Result<AddedComment, CommentRepositoryError> {
        let id = self.seed(owner, thread_id, comment.content());
        Ok(AddedComment {
            id,
            content: comment.content().to_string(),
            owner,
        })
    }

    async fn get_comment(&self, comment_id: Uuid) -> Result<Comment, CommentRepositoryError> {
        self.find(comment_id).ok_or(CommentRepositoryError::NotFound)
    }

    async fn get_comments(&self, thread_id: Uuid) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut comments: Vec<Comment> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.thread_id == thread_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.created_at);
        Ok(comments)
    }

    async fn delete_comment(
        &self,
        comment_id: Uuid,
        owner: UserId,
    ) -> Result<DeletedComment, CommentRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let comment = rows
            .iter_mut()
            .find(|c| c.id == comment_id && !c.is_deleted())
            .ok_or(CommentRepositoryError::NotFound)?;

        if comment.owner != owner {
            return Err(CommentRepositoryError::Forbidden);
        }

        let at = Utc::now();
        comment.state = CommentState::Deleted { at };
        Ok(DeletedComment {
            is_deleted: true,
            deleted_at: at,
        })
    }
}

// ─── Replies ────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryReplies {
    rows: Arc<Mutex<Vec<Reply>>>,
}

impl InMemoryReplies {
    pub fn seed(&self, owner: UserId, comment_id: Uuid, content: &str) -> Uuid {
        let mut rows = self.rows.lock().unwrap();
        let id = Uuid::new_v4();
        let created_at = tick(rows.len());
        rows.push(Reply {
            id,
            owner,
            comment_id,
            content: content.to_string(),
            created_at,
            state: ReplyState::Active,
        });
        id
    }

    pub fn find(&self, id: Uuid) -> Option<Reply> {
        self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned()
    }
}

#[async_trait]
impl AvailabilityProbe for InMemoryReplies {
    fn resource(&self) -> Resource {
        Resource::Reply
    }

    async fn verify_availability(&self, id: Uuid) -> Result<(), AvailabilityError> {
        match self.find(id) {
            Some(reply) if !reply.is_deleted() => Ok(()),
            _ => Err(AvailabilityError::NotFound),
        }
    }
}

#[async_trait]
impl ReplyRepository for InMemoryReplies {
    async fn add_reply(
        &self,
        reply: RegisterReply,
        owner: UserId,
        comment_id: Uuid,
    ) -> Result<AddedReply, ReplyRepositoryError> {
        let id = self.seed(owner, comment_id, reply.content());
        Ok(AddedReply {
            id,
            content: reply.content().to_string(),
            owner,
        })
    }

    async fn get_reply(&self, reply_id: Uuid) -> Result<Reply, ReplyRepositoryError> {
        self.find(reply_id).ok_or(ReplyRepositoryError::NotFound)
    }

    async fn get_replies(&self, comment_id: Uuid) -> Result<Vec<Reply>, ReplyRepositoryError> {
        let mut replies: Vec<Reply> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.comment_id == comment_id)
            .cloned()
            .collect();
        replies.sort_by_key(|r| r.created_at);
        Ok(replies)
    }

    async fn delete_reply(
        &self,
        reply_id: Uuid,
        owner: UserId,
    ) -> Result<DeletedReply, ReplyRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let reply = rows
            .iter_mut()
            .find(|r| r.id == reply_id && !r.is_deleted())
            .ok_or(ReplyRepositoryError::NotFound)?;

        if reply.owner != owner {
            return Err(ReplyRepositoryError::Forbidden);
        }

        let at = Utc::now();
        reply.state = ReplyState::Deleted { at };
        Ok(DeletedReply {
            is_deleted: true,
            deleted_at: at,
        })
    }
}

// ─── Users ──────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    names: Arc<Mutex<HashMap<Uuid, String>>>,
}

impl InMemoryUsers {
    pub fn register(&self, username: &str) -> UserId {
        let id = Uuid::new_v4();
        self.names
            .lock()
            .unwrap()
            .insert(id, username.to_string());
        UserId::from(id)
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        unimplemented!("Not used by forum services")
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
        unimplemented!("Not used by forum services")
    }

    async fn find_usernames(
        &self,
        user_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, String>, UserQueryError> {
        let names = self.names.lock().unwrap();
        Ok(user_ids
            .iter()
            .filter_map(|id| names.get(id).map(|n| (*id, n.clone())))
            .collect())
    }
}
