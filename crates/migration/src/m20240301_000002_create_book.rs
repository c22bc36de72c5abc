//! Create `book` table with FK to `seller`.
//!
//! Deleting a seller cascades to its books.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string_len(Book::Title, 50).not_null())
                    .col(string_len(Book::Author, 100).not_null())
                    .col(integer(Book::Year).not_null())
                    .col(integer(Book::CountPages).not_null())
                    .col(integer(Book::SellerId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_seller")
                            .from(Book::Table, Book::SellerId)
                            .to(Seller::Table, Seller::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_book_seller_id")
                    .table(Book::Table)
                    .col(Book::SellerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Book::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Book { Table, Id, Title, Author, Year, CountPages, SellerId }

#[derive(DeriveIden)]
enum Seller { Table, Id }
