use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    thread::application::{
        domain::entities::{AddedThread, RegisterThread},
        ports::{
            incoming::use_cases::{AddThreadError, AddThreadUseCase},
            outgoing::{ThreadRepository, ThreadRepositoryError},
        },
    },
};

#[derive(Debug, Clone)]
pub struct AddThreadService<R>
where
    R: ThreadRepository,
{
    repository: R,
}

impl<R> AddThreadService<R>
where
    R: ThreadRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddThreadUseCase for AddThreadService<R>
where
    R: ThreadRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        title: String,
        body: String,
    ) -> Result<AddedThread, AddThreadError> {
        let thread = RegisterThread::new(title, body)?;

        self.repository
            .add_thread(thread, owner)
            .await
            .map_err(|e| match e {
                ThreadRepositoryError::Invariant(msg) => AddThreadError::Invariant(msg),
                other => AddThreadError::RepositoryError(other.to_string()),
            })
    }
}
