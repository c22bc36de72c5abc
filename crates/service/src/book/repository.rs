use async_trait::async_trait;

use super::domain::{Book, BookInput};
use crate::errors::ServiceError;

/// Persistence operations for books.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books in id order.
    async fn list(&self) -> Result<Vec<Book>, ServiceError>;
    async fn create(&self, input: &BookInput) -> Result<Book, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Book>, ServiceError>;
    /// Overwrite every field; `None` if the row does not exist.
    async fn update(&self, id: i32, input: &BookInput) -> Result<Option<Book>, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBookRepository {
        rows: Mutex<BTreeMap<i32, Book>>,
        next_id: Mutex<i32>,
    }

    #[async_trait]
    impl BookRepository for MockBookRepository {
        async fn list(&self) -> Result<Vec<Book>, ServiceError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn create(&self, input: &BookInput) -> Result<Book, ServiceError> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let book = Book::from_input(*next, input);
            self.rows.lock().unwrap().insert(book.id, book.clone());
            Ok(book)
        }

        async fn get(&self, id: i32) -> Result<Option<Book>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn update(&self, id: i32, input: &BookInput) -> Result<Option<Book>, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&id) {
                Some(row) => {
                    *row = Book::from_input(id, input);
                    Ok(Some(row.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }
}
