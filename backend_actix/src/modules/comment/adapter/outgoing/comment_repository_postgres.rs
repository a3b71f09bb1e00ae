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
use crate::comment::application::domain::entities::{
    AddedComment, Comment, DeletedComment, RegisterComment,
};
use crate::comment::application::ports::outgoing::{CommentRepository, CommentRepositoryError};
use crate::shared::db_error::{classify_db_error, DbErrorKind};
use crate::shared::id_generator::IdGenerator;
use crate::shared::ownership_gate::{AvailabilityError, AvailabilityProbe, Resource};

use super::sea_orm_entity::{
    ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as CommentEntity,
};

#[derive(Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CommentRepositoryPostgres {
    pub fn new(
        db: Arc<DatabaseConnection>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { db, ids, clock }
    }
}

fn map_db_error(e: DbErr) -> CommentRepositoryError {
    match classify_db_error(&e) {
        DbErrorKind::UniqueViolation | DbErrorKind::ConstraintViolation => {
            CommentRepositoryError::Invariant(e.to_string())
        }
        DbErrorKind::Other => {
            error!(error = %e, "Comment query failed");
            CommentRepositoryError::DatabaseError(e.to_string())
        }
    }
}

#[async_trait]
impl AvailabilityProbe for CommentRepositoryPostgres {
    fn resource(&self) -> Resource {
        Resource::Comment
    }

    async fn verify_availability(&self, id: Uuid) -> Result<(), AvailabilityError> {
        CommentEntity::find_by_id(id)
            .filter(CommentColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(|e| AvailabilityError::DatabaseError(e.to_string()))?
            .map(|_| ())
            .ok_or(AvailabilityError::NotFound)
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn add_comment(
        &self,
        comment: RegisterComment,
        owner: UserId,
        thread_id: Uuid,
    ) -> Result<AddedComment, CommentRepositoryError> {
        let active = CommentActiveModel {
            id: Set(self.ids.next_id()),
            owner_id: Set(owner.value()),
            thread_id: Set(thread_id),
            content: Set(comment.content().to_string()),
            created_at: Set(self.clock.utc().into()),
            deleted_at: Set(None),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_error)?;

        Ok(inserted.to_added())
    }

    async fn get_comment(&self, comment_id: Uuid) -> Result<Comment, CommentRepositoryError> {
        CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(map_db_error)?
            .map(|m| m.to_domain())
            .ok_or(CommentRepositoryError::NotFound)
    }

    async fn get_comments(&self, thread_id: Uuid) -> Result<Vec<Comment>, CommentRepositoryError> {
        let rows = CommentEntity::find()
            .filter(CommentColumn::ThreadId.eq(thread_id))
            .order_by_asc(CommentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn delete_comment(
        &self,
        comment_id: Uuid,
        owner: UserId,
    ) -> Result<DeletedComment, CommentRepositoryError> {
        let row = CommentEntity::find_by_id(comment_id)
            .filter(CommentColumn::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_error)?
            .ok_or(CommentRepositoryError::NotFound)?;

        if row.owner_id != owner.value() {
            warn!(%comment_id, actor = %owner, "Comment delete by non-owner");
            return Err(CommentRepositoryError::Forbidden);
        }

        let now = self.clock.utc();
        let result = CommentEntity::update_many()
            .col_expr(CommentColumn::DeletedAt, Expr::value(now.fixed_offset()))
            .filter(CommentColumn::Id.eq(comment_id))
            .filter(CommentColumn::DeletedAt.is_null())
            .exec(&*self.db)
            .await
            .map_err(map_db_error)?;

        // Someone else deleted it between the fetch and the update.
        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::NotFound);
        }

        info!(%comment_id, "Comment soft-deleted");
        Ok(DeletedComment {
            is_deleted: true,
            deleted_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::adapter::outgoing::sea_orm_entity::Model as CommentModel;
    use crate::tests::support::fixed_sources::{FixedClock, FixedIdGenerator};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap()
    }

    fn comment_model(id: Uuid, owner: Uuid, thread_id: Uuid) -> CommentModel {
        CommentModel {
            id,
            owner_id: owner,
            thread_id,
            content: "Sebuah komentar".to_string(),
            created_at: now().into(),
            deleted_at: None,
        }
    }

    fn repository(db: DatabaseConnection) -> CommentRepositoryPostgres {
        CommentRepositoryPostgres::new(
            Arc::new(db),
            Arc::new(FixedIdGenerator(Uuid::new_v4())),
            Arc::new(FixedClock(now())),
        )
    }

    #[tokio::test]
    async fn add_comment_returns_inserted_row() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![comment_model(id, owner, Uuid::new_v4())]])
            .into_connection();

        let added = repository(db)
            .add_comment(
                RegisterComment::new("Sebuah komentar".into()).unwrap(),
                UserId::from(owner),
                Uuid::new_v4(),
            )
            .await
            .unwrap();

        assert_eq!(added.id, id);
        assert_eq!(added.content, "Sebuah komentar");
        assert_eq!(added.owner, UserId::from(owner));
    }

    #[tokio::test]
    async fn add_comment_on_missing_thread_is_invariant() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "insert or update on table \"comments\" violates foreign key constraint".into(),
            )])
            .into_connection();

        let result = repository(db)
            .add_comment(
                RegisterComment::new("x".into()).unwrap(),
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
            )
            .await;

        assert!(matches!(result, Err(CommentRepositoryError::Invariant(_))));
    }

    #[tokio::test]
    async fn get_comment_keeps_deleted_rows() {
        let id = Uuid::new_v4();
        let mut model = comment_model(id, Uuid::new_v4(), Uuid::new_v4());
        model.deleted_at = Some(now().into());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let comment = repository(db).get_comment(id).await.unwrap();

        assert!(comment.is_deleted());
    }

    #[tokio::test]
    async fn get_comment_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<CommentModel>::new()])
            .into_connection();

        let result = repository(db).get_comment(Uuid::new_v4()).await;

        assert_eq!(result, Err(CommentRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn get_comments_preserves_query_order() {
        let thread_id = Uuid::new_v4();
        let first = comment_model(Uuid::new_v4(), Uuid::new_v4(), thread_id);
        let mut second = comment_model(Uuid::new_v4(), Uuid::new_v4(), thread_id);
        second.created_at = (now() + Duration::minutes(1)).into();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();

        let comments = repository(db).get_comments(thread_id).await.unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, first.id);
        assert_eq!(comments[1].id, second.id);
    }

    #[tokio::test]
    async fn verify_availability_rejects_missing_or_deleted() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<CommentModel>::new()])
            .into_connection();

        let result = repository(db).verify_availability(Uuid::new_v4()).await;

        assert_eq!(result, Err(AvailabilityError::NotFound));
    }

    #[tokio::test]
    async fn delete_comment_stamps_clock_time() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![comment_model(id, owner, Uuid::new_v4())]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let deleted = repository(db)
            .delete_comment(id, UserId::from(owner))
            .await
            .unwrap();

        assert!(deleted.is_deleted);
        assert_eq!(deleted.deleted_at, now());
    }

    #[tokio::test]
    async fn delete_comment_by_stranger_is_forbidden() {
        let id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![comment_model(id, Uuid::new_v4(), Uuid::new_v4())]])
            .into_connection();

        let result = repository(db)
            .delete_comment(id, UserId::from(Uuid::new_v4()))
            .await;

        assert_eq!(result, Err(CommentRepositoryError::Forbidden));
    }

    #[tokio::test]
    async fn delete_comment_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<CommentModel>::new()])
            .into_connection();

        let result = repository(db)
            .delete_comment(Uuid::new_v4(), UserId::from(Uuid::new_v4()))
            .await;

        assert_eq!(result, Err(CommentRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_comment_lost_race_is_not_found() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![comment_model(id, owner, Uuid::new_v4())]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = repository(db).delete_comment(id, UserId::from(owner)).await;

        assert_eq!(result, Err(CommentRepositoryError::NotFound));
    }
}
