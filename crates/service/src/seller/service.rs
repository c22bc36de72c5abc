use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{SellerInput, Seller, SellerList, SellerWithBooks};
use super::repository::SellerRepository;
use crate::errors::ServiceError;

/// Seller use cases, independent of the web framework.
pub struct SellerService<R: SellerRepository> {
    repo: Arc<R>,
}

impl<R: SellerRepository> SellerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate and persist a new seller.
    ///
    /// # Examples
    /// ```
    /// use service::seller::{service::SellerService, repository::mock::MockSellerRepository, domain::SellerInput};
    /// use std::sync::Arc;
    /// let svc = SellerService::new(Arc::new(MockSellerRepository::default()));
    /// let input = SellerInput { first_name: "Ilya".into(), last_name: "Neustroev".into(), email: "in@mail.ru".into(), password: "12345678".into() };
    /// let seller = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(seller.id, 1);
    /// assert_eq!(seller.email, "in@mail.ru");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: SellerInput) -> Result<Seller, ServiceError> {
        input.validate()?;
        let seller = self.repo.create(&input).await?;
        info!(seller_id = seller.id, "seller_created");
        Ok(seller)
    }

    pub async fn list(&self) -> Result<SellerList, ServiceError> {
        let sellers = self.repo.list().await?;
        Ok(SellerList { sellers })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<SellerWithBooks, ServiceError> {
        self.repo
            .get_with_books(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("seller"))
    }

    /// Replace every field of an existing seller.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: SellerInput) -> Result<Seller, ServiceError> {
        input.validate()?;
        let seller = self.repo
            .update(id, &input)
            .await?
            .ok_or_else(|| ServiceError::not_found("seller"))?;
        info!(seller_id = id, "seller_updated");
        Ok(seller)
    }

    /// Remove a seller. Absence is not an error; returns whether a row existed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let existed = self.repo.delete(id).await?;
        info!(seller_id = id, existed, "seller_deleted");
        Ok(existed)
    }
}
