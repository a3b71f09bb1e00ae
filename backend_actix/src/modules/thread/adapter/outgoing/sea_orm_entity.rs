use chrono::Utc;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::thread::application::domain::entities::{AddedThread, Thread};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "threads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub owner_id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub body: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_added(&self) -> AddedThread {
        AddedThread {
            id: self.id,
            title: self.title.clone(),
            owner: UserId::from(self.owner_id),
        }
    }

    pub fn to_domain(self) -> Thread {
        Thread {
            id: self.id,
            owner: UserId::from(self.owner_id),
            title: self.title,
            body: self.body,
            created_at: self.created_at.with_timezone(&Utc),
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
}

impl ActiveModelBehavior for ActiveModel {}
