use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, message: Option<String>) -> Self {
        Self { status, title, message }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(message.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            return Self::validation(e.to_string());
        }
        match e {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            _ => {
                error!(err = %e, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

/// Any body that cannot be decoded into the incoming schema is a validation failure.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

/// Ids that do not parse as an integer are rejected the same way as bad bodies.
impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn service_errors_map_to_status() {
        assert_eq!(JsonApiError::from(ServiceError::Validation("x".into())).status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(JsonApiError::from(ServiceError::Model(ModelError::Validation("x".into()))).status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(JsonApiError::from(ServiceError::not_found("seller")).status, StatusCode::NOT_FOUND);
        assert_eq!(JsonApiError::from(ServiceError::Db("boom".into())).status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(JsonApiError::from(ServiceError::Model(ModelError::Db("boom".into()))).status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn into_response_keeps_status() {
        let resp = JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
