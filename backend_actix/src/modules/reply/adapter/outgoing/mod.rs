pub mod sea_orm_entity;
pub mod reply_repository_postgres;

pub use reply_repository_postgres::ReplyRepositoryPostgres;
