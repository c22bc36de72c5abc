use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{book, errors};

/// Shortest accepted password, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seller")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Book,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Book => Entity::has_many(book::Entity).into(),
        }
    }
}

impl Related<book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_password(password: &str) -> Result<(), errors::ModelError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(errors::ModelError::Validation("Password is short!".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<Model, errors::ModelError> {
    validate_password(password)?;
    let am = ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        email: Set(email.to_string()),
        password: Set(password.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
