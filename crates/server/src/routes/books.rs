use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use service::book::domain::{Book, BookInput, BookList};
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

type JsonBody<T> = WithRejection<Json<T>, JsonApiError>;
type IdPath = WithRejection<Path<i32>, JsonApiError>;

#[utoipa::path(
    post, path = "/api/v1/books/", tag = "books",
    request_body = crate::openapi::BookInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BookDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<BookInput>,
) -> Result<(StatusCode, Json<Book>), JsonApiError> {
    let book = state.books.create(input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

#[utoipa::path(
    get, path = "/api/v1/books/", tag = "books",
    responses((status = 200, description = "All books", body = crate::openapi::BookListDoc))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<BookList>, JsonApiError> {
    let list = state.books.list().await?;
    info!(count = list.books.len(), "list books");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/v1/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BookDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, WithRejection(Path(id), _): IdPath) -> Result<Json<Book>, JsonApiError> {
    Ok(Json(state.books.get(id).await?))
}

#[utoipa::path(
    put, path = "/api/v1/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = crate::openapi::BookInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BookDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(input), _): JsonBody<BookInput>,
) -> Result<Json<Book>, JsonApiError> {
    Ok(Json(state.books.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/v1/books/{id}", tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses((status = 204, description = "Deleted, or already absent"))
)]
pub async fn delete(State(state): State<ServerState>, WithRejection(Path(id), _): IdPath) -> Result<StatusCode, JsonApiError> {
    state.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
