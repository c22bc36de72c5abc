//! Migrator registering entity-specific migrations in dependency order.
//! `book` references `seller`, so sellers are created first.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_seller;
mod m20240301_000002_create_book;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_seller::Migration),
            Box::new(m20240301_000002_create_book::Migration),
        ]
    }
}
