pub mod sea_orm_entity;
pub mod thread_repository_postgres;

pub use thread_repository_postgres::ThreadRepositoryPostgres;
