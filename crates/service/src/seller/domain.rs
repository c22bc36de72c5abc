use serde::{Deserialize, Serialize};

use crate::book::domain::Book;
use crate::errors::ServiceError;

/// Incoming seller payload for create and full replace. The password is
/// stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SellerInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        models::seller::validate_password(&self.password)?;
        Ok(())
    }
}

/// Seller as returned to clients; never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerWithBooks {
    #[serde(flatten)]
    pub seller: Seller,
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerList {
    pub sellers: Vec<Seller>,
}

impl Seller {
    pub fn from_input(id: i32, input: &SellerInput) -> Self {
        Self {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
        }
    }
}

impl From<models::seller::Model> for Seller {
    fn from(m: models::seller::Model) -> Self {
        Self { id: m.id, first_name: m.first_name, last_name: m.last_name, email: m.email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seller_with_books_flattens_seller_fields() {
        let s = SellerWithBooks {
            seller: Seller { id: 1, first_name: "Alexander".into(), last_name: "Boytsov".into(), email: "ab@mail.ru".into() },
            books: vec![Book { id: 3, title: "Eugeny Onegin".into(), author: "Pushkin".into(), year: 2001, count_pages: 104, seller_id: 1 }],
        };
        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            json!({
                "id": 1, "first_name": "Alexander", "last_name": "Boytsov", "email": "ab@mail.ru",
                "books": [{"id": 3, "title": "Eugeny Onegin", "author": "Pushkin", "year": 2001, "count_pages": 104, "seller_id": 1}]
            })
        );
    }

    #[test]
    fn input_validation_uses_password_rule() {
        let mut input = SellerInput { first_name: "a".into(), last_name: "b".into(), email: "c".into(), password: "short".into() };
        assert!(input.validate().unwrap_err().is_validation());
        input.password = "long enough".into();
        assert!(input.validate().is_ok());
    }
}
