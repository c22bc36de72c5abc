//! Create `seller` table.
//!
//! Root entity; books reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seller::Table)
                    .if_not_exists()
                    .col(pk_auto(Seller::Id))
                    .col(string_len(Seller::FirstName, 50).not_null())
                    .col(string_len(Seller::LastName, 50).not_null())
                    .col(string_len(Seller::Email, 100).not_null())
                    // Stored as submitted
                    .col(string_len(Seller::Password, 100).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Seller::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Seller { Table, Id, FirstName, LastName, Email, Password }
