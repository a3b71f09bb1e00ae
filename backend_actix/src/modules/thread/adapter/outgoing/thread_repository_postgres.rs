use async_trait::async_trait;
use mockable::Clock;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::db_error::{classify_db_error, DbErrorKind};
use crate::shared::id_generator::IdGenerator;
use crate::shared::ownership_gate::{AvailabilityError, AvailabilityProbe, Resource};
use crate::thread::application::domain::entities::{AddedThread, RegisterThread, Thread};
use crate::thread::application::ports::outgoing::{ThreadRepository, ThreadRepositoryError};

use super::sea_orm_entity::{ActiveModel as ThreadActiveModel, Entity as ThreadEntity};

#[derive(Clone)]
pub struct ThreadRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl ThreadRepositoryPostgres {
    pub fn new(
        db: Arc<DatabaseConnection>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { db, ids, clock }
    }
}

fn map_db_error(e: DbErr) -> ThreadRepositoryError {
    match classify_db_error(&e) {
        DbErrorKind::UniqueViolation | DbErrorKind::ConstraintViolation => {
            ThreadRepositoryError::Invariant(e.to_string())
        }
        DbErrorKind::Other => {
            error!(error = %e, "Thread query failed");
            ThreadRepositoryError::DatabaseError(e.to_string())
        }
    }
}

#[async_trait]
impl AvailabilityProbe for ThreadRepositoryPostgres {
    fn resource(&self) -> Resource {
        Resource::Thread
    }

    async fn verify_availability(&self, id: Uuid) -> Result<(), AvailabilityError> {
        ThreadEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| AvailabilityError::DatabaseError(e.to_string()))?
            .map(|_| ())
            .ok_or(AvailabilityError::NotFound)
    }
}

#[async_trait]
impl ThreadRepository for ThreadRepositoryPostgres {
    async fn add_thread(
        &self,
        thread: RegisterThread,
        owner: UserId,
    ) -> Result<AddedThread, ThreadRepositoryError> {
        let active = ThreadActiveModel {
            id: Set(self.ids.next_id()),
            owner_id: Set(owner.value()),
            title: Set(thread.title().to_string()),
            body: Set(thread.body().to_string()),
            created_at: Set(self.clock.utc().into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_error)?;

        Ok(inserted.to_added())
    }

    async fn get_thread(&self, thread_id: Uuid) -> Result<Thread, ThreadRepositoryError> {
        ThreadEntity::find_by_id(thread_id)
            .one(&*self.db)
            .await
            .map_err(map_db_error)?
            .map(|m| m.to_domain())
            .ok_or(ThreadRepositoryError::NotFound)
    }
}
