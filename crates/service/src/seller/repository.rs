use async_trait::async_trait;

use super::domain::{Seller, SellerInput, SellerWithBooks};
use crate::errors::ServiceError;

/// Persistence operations for sellers.
#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// All sellers in id order.
    async fn list(&self) -> Result<Vec<Seller>, ServiceError>;
    async fn create(&self, input: &SellerInput) -> Result<Seller, ServiceError>;
    /// Seller with its books loaded in the same query.
    async fn get_with_books(&self, id: i32) -> Result<Option<SellerWithBooks>, ServiceError>;
    /// Overwrite every field; `None` if the row does not exist.
    async fn update(&self, id: i32, input: &SellerInput) -> Result<Option<Seller>, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use crate::book::domain::Book;

    #[derive(Default)]
    pub struct MockSellerRepository {
        rows: Mutex<BTreeMap<i32, SellerInput>>,
        books: Mutex<Vec<Book>>,
        next_id: Mutex<i32>,
    }

    impl MockSellerRepository {
        /// Attach a book so `get_with_books` has something to return.
        pub fn add_book(&self, book: Book) {
            self.books.lock().unwrap().push(book);
        }

        pub fn stored(&self, id: i32) -> Option<SellerInput> {
            self.rows.lock().unwrap().get(&id).cloned()
        }
    }

    #[async_trait]
    impl SellerRepository for MockSellerRepository {
        async fn list(&self) -> Result<Vec<Seller>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().map(|(id, s)| Seller::from_input(*id, s)).collect())
        }

        async fn create(&self, input: &SellerInput) -> Result<Seller, ServiceError> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            self.rows.lock().unwrap().insert(*next, input.clone());
            Ok(Seller::from_input(*next, input))
        }

        async fn get_with_books(&self, id: i32) -> Result<Option<SellerWithBooks>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            let Some(s) = rows.get(&id) else { return Ok(None) };
            let books = self.books.lock().unwrap().iter().filter(|b| b.seller_id == id).cloned().collect();
            Ok(Some(SellerWithBooks { seller: Seller::from_input(id, s), books }))
        }

        async fn update(&self, id: i32, input: &SellerInput) -> Result<Option<Seller>, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&id) {
                Some(row) => {
                    *row = input.clone();
                    Ok(Some(Seller::from_input(id, input)))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            self.books.lock().unwrap().retain(|b| b.seller_id != id);
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }
}
