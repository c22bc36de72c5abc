use serde::{Deserialize, Serialize};

/// Incoming book payload for create and full replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i32,
}

/// Book as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<Book>,
}

impl Book {
    pub fn from_input(id: i32, input: &BookInput) -> Self {
        Self {
            id,
            title: input.title.clone(),
            author: input.author.clone(),
            year: input.year,
            count_pages: input.count_pages,
            seller_id: input.seller_id,
        }
    }
}

impl From<models::book::Model> for Book {
    fn from(m: models::book::Model) -> Self {
        Self { id: m.id, title: m.title, author: m.author, year: m.year, count_pages: m.count_pages, seller_id: m.seller_id }
    }
}
