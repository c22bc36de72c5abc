use axum::{extract::{Path, State}, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use service::seller::domain::{Seller, SellerInput, SellerList, SellerWithBooks};
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

type JsonBody<T> = WithRejection<Json<T>, JsonApiError>;
type IdPath = WithRejection<Path<i32>, JsonApiError>;

#[utoipa::path(
    post, path = "/api/v1/sellers/", tag = "sellers",
    request_body = crate::openapi::SellerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SellerDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): JsonBody<SellerInput>,
) -> Result<(StatusCode, Json<Seller>), JsonApiError> {
    let seller = state.sellers.create(input).await?;
    Ok((StatusCode::CREATED, Json(seller)))
}

#[utoipa::path(
    get, path = "/api/v1/sellers/", tag = "sellers",
    responses((status = 200, description = "All sellers", body = crate::openapi::SellerListDoc))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<SellerList>, JsonApiError> {
    let list = state.sellers.list().await?;
    info!(count = list.sellers.len(), "list sellers");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/v1/sellers/{id}", tag = "sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    responses(
        (status = 200, description = "Seller with books", body = crate::openapi::SellerWithBooksDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, WithRejection(Path(id), _): IdPath) -> Result<Json<SellerWithBooks>, JsonApiError> {
    Ok(Json(state.sellers.get(id).await?))
}

#[utoipa::path(
    put, path = "/api/v1/sellers/{id}", tag = "sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    request_body = crate::openapi::SellerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SellerDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(input), _): JsonBody<SellerInput>,
) -> Result<Json<Seller>, JsonApiError> {
    Ok(Json(state.sellers.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/v1/sellers/{id}", tag = "sellers",
    params(("id" = i32, Path, description = "Seller ID")),
    responses((status = 204, description = "Deleted, or already absent"))
)]
pub async fn delete(State(state): State<ServerState>, WithRejection(Path(id), _): IdPath) -> Result<StatusCode, JsonApiError> {
    state.sellers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
