use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::book::domain::Book;
use crate::errors::{updated_row, ServiceError};
use crate::seller::domain::{Seller, SellerInput, SellerWithBooks};
use crate::seller::repository::SellerRepository;
use models::{book, seller};

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmSellerRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl SellerRepository for SeaOrmSellerRepository {
    async fn list(&self) -> Result<Vec<Seller>, ServiceError> {
        let rows = seller::Entity::find()
            .order_by_asc(seller::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Seller::from).collect())
    }

    async fn create(&self, input: &SellerInput) -> Result<Seller, ServiceError> {
        let created = seller::create(&self.db, &input.first_name, &input.last_name, &input.email, &input.password).await?;
        Ok(created.into())
    }

    async fn get_with_books(&self, id: i32) -> Result<Option<SellerWithBooks>, ServiceError> {
        let rows = seller::Entity::find_by_id(id)
            .find_with_related(book::Entity)
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().next().map(|(s, books)| SellerWithBooks {
            seller: s.into(),
            books: books.into_iter().map(Book::from).collect(),
        }))
    }

    async fn update(&self, id: i32, input: &SellerInput) -> Result<Option<Seller>, ServiceError> {
        let Some(existing) = seller::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: seller::ActiveModel = existing.into();
        am.first_name = Set(input.first_name.clone());
        am.last_name = Set(input.last_name.clone());
        am.email = Set(input.email.clone());
        am.password = Set(input.password.clone());
        let updated = updated_row(am.update(&self.db).await)?;
        Ok(updated.map(Into::into))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = seller::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
