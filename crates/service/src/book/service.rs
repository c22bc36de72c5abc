use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Book, BookInput, BookList};
use super::repository::BookRepository;
use crate::errors::ServiceError;

/// Book use cases. Book fields carry no validation beyond their types.
pub struct BookService<R: BookRepository> {
    repo: Arc<R>,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(seller_id = input.seller_id))]
    pub async fn create(&self, input: BookInput) -> Result<Book, ServiceError> {
        let book = self.repo.create(&input).await?;
        info!(book_id = book.id, "book_created");
        Ok(book)
    }

    pub async fn list(&self) -> Result<BookList, ServiceError> {
        let books = self.repo.list().await?;
        Ok(BookList { books })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Book, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("book"))
    }

    /// Replace every field of an existing book, including its seller.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: BookInput) -> Result<Book, ServiceError> {
        let book = self.repo
            .update(id, &input)
            .await?
            .ok_or_else(|| ServiceError::not_found("book"))?;
        info!(book_id = id, "book_updated");
        Ok(book)
    }

    /// Remove a book. Absence is not an error; returns whether a row existed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let existed = self.repo.delete(id).await?;
        info!(book_id = id, existed, "book_deleted");
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::repository::mock::MockBookRepository;

    fn input(title: &str) -> BookInput {
        BookInput { title: title.into(), author: "Robert Martin".into(), year: 2007, count_pages: 104, seller_id: 1 }
    }

    fn svc() -> BookService<MockBookRepository> {
        BookService::new(Arc::new(MockBookRepository::default()))
    }

    #[tokio::test]
    async fn create_get_round_trip() {
        let svc = svc();
        let created = svc.create(input("Wrong Code")).await.unwrap();
        assert_eq!(created, Book::from_input(1, &input("Wrong Code")));
        assert_eq!(svc.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn list_in_creation_order() {
        let svc = svc();
        let a = svc.create(input("Eugeny Onegin")).await.unwrap();
        let b = svc.create(input("Mziri")).await.unwrap();
        assert_eq!(svc.list().await.unwrap(), BookList { books: vec![a, b] });
    }

    #[tokio::test]
    async fn no_validation_on_book_fields() {
        let svc = svc();
        let odd = BookInput { title: String::new(), author: String::new(), year: -5, count_pages: 0, seller_id: 1 };
        assert!(svc.create(odd).await.is_ok());
    }

    #[tokio::test]
    async fn update_and_missing() {
        let svc = svc();
        let b = svc.create(input("Eugeny Onegin")).await.unwrap();
        let new = BookInput { title: "Mziri".into(), author: "Lermontov".into(), year: 1997, count_pages: 100, seller_id: 2 };
        assert_eq!(svc.update(b.id, new.clone()).await.unwrap(), Book::from_input(b.id, &new));

        let err = svc.update(b.id + 1, new).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(svc.list().await.unwrap().books.len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_still_succeeds() {
        let svc = svc();
        assert!(!svc.delete(1).await.unwrap());
        assert!(matches!(svc.get(1).await, Err(ServiceError::NotFound(_))));
    }
}
