use anyhow::Result;
use sea_orm::{EntityTrait, ModelTrait, QueryOrder, PaginatorTrait};

use super::test_db;
use crate::{book, errors::ModelError, seller};

#[tokio::test]
async fn seller_create_and_fetch() -> Result<()> {
    let db = test_db().await?;

    let created = seller::create(&db, "Alexander", "Boytsov", "ab@mail.ru", "00000000").await?;
    assert_eq!(created.id, 1);

    let found = seller::Entity::find_by_id(created.id).one(&db).await?.expect("seller row");
    assert_eq!(found, created);
    assert_eq!(found.password, "00000000");
    Ok(())
}

#[tokio::test]
async fn seller_short_password_is_not_persisted() -> Result<()> {
    let db = test_db().await?;

    let err = seller::create(&db, "Ilya", "Neustroev", "in@mail.ru", "1234567").await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert_eq!(seller::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn seller_loads_books_eagerly() -> Result<()> {
    let db = test_db().await?;

    let s = seller::create(&db, "Alexander", "Boytsov", "ab@mail.ru", "00000000").await?;
    let b1 = book::create(&db, "Eugeny Onegin", "Pushkin", 2001, 104, s.id).await?;
    let b2 = book::create(&db, "Mziri", "Lermontov", 1997, 104, s.id).await?;

    let rows = seller::Entity::find_by_id(s.id)
        .find_with_related(book::Entity)
        .order_by_asc(book::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(rows.len(), 1);
    let (parent, books) = &rows[0];
    assert_eq!(parent.id, s.id);
    assert_eq!(books, &vec![b1, b2]);
    Ok(())
}

#[tokio::test]
async fn seller_without_books_has_empty_relation() -> Result<()> {
    let db = test_db().await?;

    let s = seller::create(&db, "Ilya", "Neustroev", "in@mail.ru", "12345678").await?;
    let books = s.find_related(book::Entity).all(&db).await?;
    assert!(books.is_empty());

    let rows = seller::Entity::find_by_id(s.id).find_with_related(book::Entity).all(&db).await?;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].1.is_empty());
    Ok(())
}

#[tokio::test]
async fn book_belongs_to_seller() -> Result<()> {
    let db = test_db().await?;

    let s = seller::create(&db, "Alexander", "Boytsov", "ab@mail.ru", "00000000").await?;
    let b = book::create(&db, "Wrong Code", "Robert Martin", 2007, 104, s.id).await?;

    let owner = b.find_related(seller::Entity).one(&db).await?.expect("owner");
    assert_eq!(owner.id, s.id);
    Ok(())
}

#[tokio::test]
async fn book_with_unknown_seller_is_rejected() -> Result<()> {
    let db = test_db().await?;

    let err = book::create(&db, "Orphan", "Nobody", 2000, 10, 42).await.unwrap_err();
    assert!(matches!(err, ModelError::Db(_)));
    assert_eq!(book::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn deleting_seller_cascades_to_books() -> Result<()> {
    let db = test_db().await?;

    let keep = seller::create(&db, "Ilya", "Neustroev", "in@mail.ru", "12345678").await?;
    let gone = seller::create(&db, "Alexander", "Boytsov", "ab@mail.ru", "00000000").await?;
    book::create(&db, "Eugeny Onegin", "Pushkin", 2001, 104, gone.id).await?;
    let kept_book = book::create(&db, "Mziri", "Lermontov", 1997, 104, keep.id).await?;

    let res = seller::Entity::delete_by_id(gone.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);

    let remaining = book::Entity::find().all(&db).await?;
    assert_eq!(remaining, vec![kept_book]);
    Ok(())
}
