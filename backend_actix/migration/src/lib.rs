pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20261001_090000_create_threads_table;
mod m20261001_090100_create_comments_table;
mod m20261001_090200_create_replies_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20261001_090000_create_threads_table::Migration),
            Box::new(m20261001_090100_create_comments_table::Migration),
            Box::new(m20261001_090200_create_replies_table::Migration),
        ]
    }
}
