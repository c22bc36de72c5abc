use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, seller};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Seller,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Seller => Entity::belongs_to(seller::Entity)
                .from(Column::SellerId)
                .to(seller::Column::Id)
                .into(),
        }
    }
}

impl Related<seller::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a book. The seller reference is enforced by the foreign key only.
pub async fn create(
    db: &DatabaseConnection,
    title: &str,
    author: &str,
    year: i32,
    count_pages: i32,
    seller_id: i32,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        title: Set(title.to_string()),
        author: Set(author.to_string()),
        year: Set(year),
        count_pages: Set(count_pages),
        seller_id: Set(seller_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
