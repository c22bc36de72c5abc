use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::book::domain::{Book, BookInput};
use crate::book::repository::BookRepository;
use crate::errors::{updated_row, ServiceError};
use models::book;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmBookRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        let rows = book::Entity::find()
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn create(&self, input: &BookInput) -> Result<Book, ServiceError> {
        let created = book::create(&self.db, &input.title, &input.author, input.year, input.count_pages, input.seller_id).await?;
        Ok(created.into())
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, ServiceError> {
        let found = book::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Book::from))
    }

    async fn update(&self, id: i32, input: &BookInput) -> Result<Option<Book>, ServiceError> {
        let Some(existing) = book::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: book::ActiveModel = existing.into();
        am.title = Set(input.title.clone());
        am.author = Set(input.author.clone());
        am.year = Set(input.year);
        am.count_pages = Set(input.count_pages);
        am.seller_id = Set(input.seller_id);
        let updated = updated_row(am.update(&self.db).await)?;
        Ok(updated.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = book::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
