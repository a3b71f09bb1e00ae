use async_trait::async_trait;
use mockable::Clock;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};
use crate::shared::db_error::{classify_db_error, DbErrorKind};
use crate::shared::id_generator::IdGenerator;

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl UserRepositoryPostgres {
    pub fn new(
        db: Arc<DatabaseConnection>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { db, ids, clock }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = self.clock.utc();
        let active_user = UserActiveModel {
            id: Set(self.ids.next_id()),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            full_name: Set(user.full_name),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(|e| match classify_db_error(&e) {
                DbErrorKind::UniqueViolation => UserRepositoryError::UserAlreadyExists,
                _ => UserRepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(inserted.to_domain())
    }
}
