use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::book::{BookService, SeaOrmBookRepository};
use service::seller::{SeaOrmSellerRepository, SellerService};

use crate::openapi::ApiDoc;

pub mod books;
pub mod sellers;

/// Shared handler state; every service talks to the same connection pool.
#[derive(Clone)]
pub struct ServerState {
    pub sellers: Arc<SellerService<SeaOrmSellerRepository>>,
    pub books: Arc<BookService<SeaOrmBookRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let sellers = SellerService::new(Arc::new(SeaOrmSellerRepository { db: db.clone() }));
        let books = BookService::new(Arc::new(SeaOrmBookRepository { db }));
        Self { sellers: Arc::new(sellers), books: Arc::new(books) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: health, v1 resources and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Collection routes are reachable with and without the trailing slash
    let api = Router::new()
        .route("/api/v1/sellers", get(sellers::list).post(sellers::create))
        .route("/api/v1/sellers/", get(sellers::list).post(sellers::create))
        .route(
            "/api/v1/sellers/:id",
            get(sellers::get).put(sellers::update).delete(sellers::delete),
        )
        .route("/api/v1/books", get(books::list).post(books::create))
        .route("/api/v1/books/", get(books::list).post(books::create))
        .route(
            "/api/v1/books/:id",
            get(books::get).put(books::update).delete(books::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
