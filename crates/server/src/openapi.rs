//! OpenAPI document. Schemas mirror the JSON shapes in `service::*::domain`.
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

/// Incoming seller; `password` must be at least 8 characters.
#[derive(ToSchema)]
pub struct SellerInputDoc {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct SellerDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(ToSchema)]
pub struct SellerWithBooksDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub books: Vec<BookDoc>,
}

#[derive(ToSchema)]
pub struct SellerListDoc { pub sellers: Vec<SellerDoc> }

#[derive(ToSchema)]
pub struct BookInputDoc {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i32,
}

#[derive(ToSchema)]
pub struct BookDoc {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i32,
}

#[derive(ToSchema)]
pub struct BookListDoc { pub books: Vec<BookDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::sellers::create,
        crate::routes::sellers::list,
        crate::routes::sellers::get,
        crate::routes::sellers::update,
        crate::routes::sellers::delete,
        crate::routes::books::create,
        crate::routes::books::list,
        crate::routes::books::get,
        crate::routes::books::update,
        crate::routes::books::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            SellerInputDoc,
            SellerDoc,
            SellerWithBooksDoc,
            SellerListDoc,
            BookInputDoc,
            BookDoc,
            BookListDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "sellers"),
        (name = "books")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_all_resource_paths() {
        let doc = ApiDoc::openapi();
        for p in ["/health", "/api/v1/sellers/", "/api/v1/sellers/{id}", "/api/v1/books/", "/api/v1/books/{id}"] {
            assert!(doc.paths.paths.contains_key(p), "missing {p}");
        }
    }
}
