pub mod sea_orm_entity;
pub mod comment_repository_postgres;

pub use comment_repository_postgres::CommentRepositoryPostgres;
