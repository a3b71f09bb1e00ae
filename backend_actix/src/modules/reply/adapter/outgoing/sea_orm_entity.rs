use chrono::Utc;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::reply::application::domain::entities::{AddedReply, Reply, ReplyState};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "replies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub owner_id: Uuid,

    pub comment_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub created_at: DateTimeWithTimeZone,

    pub deleted_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_added(&self) -> AddedReply {
        AddedReply {
            id: self.id,
            content: self.content.clone(),
            owner: UserId::from(self.owner_id),
        }
    }

    pub fn to_domain(self) -> Reply {
        Reply {
            id: self.id,
            owner: UserId::from(self.owner_id),
            comment_id: self.comment_id,
            content: self.content,
            created_at: self.created_at.with_timezone(&Utc),
            state: ReplyState::from(self.deleted_at.map(|at| at.with_timezone(&Utc))),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::OwnerId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "crate::modules::comment::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CommentId",
        to = "crate::modules::comment::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Comment,
}

impl ActiveModelBehavior for ActiveModel {}
