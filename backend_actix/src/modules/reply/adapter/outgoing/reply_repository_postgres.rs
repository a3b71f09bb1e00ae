use async_trait::async_trait;
use mockable::Clock;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::reply::application::domain::entities::{AddedReply, DeletedReply, RegisterReply, Reply};
use crate::reply::application::ports::outgoing::{ReplyRepository, ReplyRepositoryError};
use crate::shared::db_error::{classify_db_error, DbErrorKind};
use crate::shared::id_generator::IdGenerator;
use crate::shared::ownership_gate::{AvailabilityError, AvailabilityProbe, Resource};

use super::sea_orm_entity::{
    ActiveModel as ReplyActiveModel, Column as ReplyColumn, Entity as ReplyEntity,
};

#[derive(Clone)]
pub struct ReplyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl ReplyRepositoryPostgres {
    pub fn new(
        db: Arc<DatabaseConnection>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { db, ids, clock }
    }
}

fn map_db_error(e: DbErr) -> ReplyRepositoryError {
    match classify_db_error(&e) {
        DbErrorKind::UniqueViolation | DbErrorKind::ConstraintViolation => {
            ReplyRepositoryError::Invariant(e.to_string())
        }
        DbErrorKind::Other => {
            error!(error = %e, "Reply query failed");
            ReplyRepositoryError::DatabaseError(e.to_string())
        }
    }
}

#[async_trait]
impl AvailabilityProbe for ReplyRepositoryPostgres {
    fn resource(&self) -> Resource {
        Resource::Reply
    }

    async fn verify_availability(&self, id: Uuid) -> Result<(), AvailabilityError> {
        ReplyEntity::find_by_id(id)
            .filter(ReplyColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| AvailabilityError::DatabaseError(e.to_string()))?
            .map(|_| ())
            .ok_or(AvailabilityError::NotFound)
    }
}

#[async_trait]
impl ReplyRepository for ReplyRepositoryPostgres {
    async fn add_reply(
        &self,
        reply: RegisterReply,
        owner: UserId,
        comment_id: Uuid,
    ) -> Result<AddedReply, ReplyRepositoryError> {
        let active = ReplyActiveModel {
            id: Set(self.ids.next_id()),
            owner_id: Set(owner.value()),
            comment_id: Set(comment_id),
            content: Set(reply.content().to_string()),
            created_at: Set(self.clock.utc().into()),
            deleted_at: Set(None),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_error)?;

        Ok(inserted.to_added())
    }

    async fn get_reply(&self, reply_id: Uuid) -> Result<Reply, ReplyRepositoryError> {
        ReplyEntity::find_by_id(reply_id)
            .one(&*self.db)
            .await
            .map_err(map_db_error)?
            .map(|m| m.to_domain())
            .ok_or(ReplyRepositoryError::NotFound)
    }

    async fn get_replies(&self, comment_id: Uuid) -> Result<Vec<Reply>, ReplyRepositoryError> {
        let rows = ReplyEntity::find()
            .filter(ReplyColumn::CommentId.eq(comment_id))
            .order_by_asc(ReplyColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn delete_reply(
        &self,
        reply_id: Uuid,
        owner: UserId,
    ) -> Result<DeletedReply, ReplyRepositoryError> {
        let row = ReplyEntity::find_by_id(reply_id)
            .filter(ReplyColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_error)?
            .ok_or(ReplyRepositoryError::NotFound)?;

        if row.owner_id != owner.value() {
            warn!(%reply_id, actor = %owner, "Reply delete by non-owner");
            return Err(ReplyRepositoryError::Forbidden);
        }

        let now = self.clock.utc();
        let result = ReplyEntity::update_many()
            .col_expr(ReplyColumn::DeletedAt, Expr::value(now.fixed_offset()))
            .filter(ReplyColumn::Id.eq(reply_id))
            .filter(ReplyColumn::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected == 0 {
            return Err(ReplyRepositoryError::NotFound);
        }

        info!(%reply_id, "Reply soft-deleted");
        Ok(DeletedReply {
            is_deleted: true,
            deleted_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::adapter::outgoing::sea_orm_entity::Model as ReplyModel;
    use crate::reply::application::domain::entities::DELETED_REPLY_PLACEHOLDER;
    use crate::tests::support::fixed_sources::{FixedClock, FixedIdGenerator};
    use chrono::{DateTime, TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 17, 10, 30, 0).unwrap()
    }

    fn reply_model(id: Uuid, owner: Uuid, deleted: bool) -> ReplyModel {
        ReplyModel {
            id,
            owner_id: owner,
            comment_id: Uuid::new_v4(),
            content: "Sebuah balasan".to_string(),
            created_at: now().into(),
            deleted_at: deleted.then(|| now().into()),
        }
    }

    fn repository(db: DatabaseConnection) -> ReplyRepositoryPostgres {
        ReplyRepositoryPostgres::new(
            Arc::new(db),
            Arc::new(FixedIdGenerator(Uuid::new_v4())),
            Arc::new(FixedClock(now())),
        )
    }

    #[tokio::test]
    async fn add_reply_returns_inserted_row() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![reply_model(id, owner, false)]])
            .into_connection();

        let added = repository(db)
            .add_reply(
                RegisterReply::new("Sebuah balasan".into()).unwrap(),
                UserId::from(owner),
                Uuid::new_v4(),
            )
            .await
            .unwrap();

        assert_eq!(added.id, id);
        assert_eq!(added.owner, UserId::from(owner));
    }

    #[tokio::test]
    async fn add_reply_database_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".into())])
            .into_connection();

        let result = repository(db)
            .add_reply(
                RegisterReply::new("x".into()).unwrap(),
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
            )
            .await;

        assert!(matches!(result, Err(ReplyRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn get_replies_marks_deleted_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                reply_model(Uuid::new_v4(), Uuid::new_v4(), false),
                reply_model(Uuid::new_v4(), Uuid::new_v4(), true),
            ]])
            .into_connection();

        let replies = repository(db).get_replies(Uuid::new_v4()).await.unwrap();

        assert_eq!(replies[0].display_content(), "Sebuah balasan");
        assert_eq!(replies[1].display_content(), DELETED_REPLY_PLACEHOLDER);
    }

    #[tokio::test]
    async fn get_reply_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<ReplyModel>::new()])
            .into_connection();

        let result = repository(db).get_reply(Uuid::new_v4()).await;

        assert_eq!(result, Err(ReplyRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn verify_availability_accepts_active_reply() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![reply_model(id, Uuid::new_v4(), false)]])
            .into_connection();

        assert_eq!(repository(db).verify_availability(id).await, Ok(()));
    }

    #[tokio::test]
    async fn delete_reply_by_owner_succeeds() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![reply_model(id, owner, false)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let deleted = repository(db).delete_reply(id, UserId::from(owner)).await.unwrap();

        assert!(deleted.is_deleted);
        assert_eq!(deleted.deleted_at, now());
    }

    #[tokio::test]
    async fn delete_reply_by_stranger_is_forbidden() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![reply_model(id, Uuid::new_v4(), false)]])
            .into_connection();

        let result = repository(db)
            .delete_reply(id, UserId::from(Uuid::new_v4()))
            .await;

        assert_eq!(result, Err(ReplyRepositoryError::Forbidden));
    }

    #[tokio::test]
    async fn delete_reply_update_failure_is_database_error() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![reply_model(id, owner, false)]])
            .append_exec_errors(vec![DbErr::Custom("deadlock detected".into())])
            .into_connection();

        let result = repository(db).delete_reply(id, UserId::from(owner)).await;

        assert!(matches!(
            result,
            Err(ReplyRepositoryError::DatabaseError(msg)) if msg.contains("deadlock")
        ));
    }
}
