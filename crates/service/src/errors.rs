use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// True for failures caused by the caller's input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Model(models::errors::ModelError::Validation(_)))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

/// Result of an `ActiveModel::update`. A row deleted after it was looked up
/// surfaces as `RecordNotUpdated` and is reported as absent.
pub(crate) fn updated_row<M>(res: Result<M, sea_orm::DbErr>) -> Result<Option<M>, ServiceError> {
    match res {
        Ok(m) => Ok(Some(m)),
        Err(sea_orm::DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn validation_classification() {
        assert!(ServiceError::Validation("x".into()).is_validation());
        assert!(ServiceError::Model(ModelError::Validation("x".into())).is_validation());
        assert!(!ServiceError::Model(ModelError::Db("x".into())).is_validation());
        assert!(!ServiceError::not_found("seller").is_validation());
    }

    #[test]
    fn vanished_row_on_update_is_absent() {
        assert_eq!(updated_row(Ok(3)).unwrap(), Some(3));
        assert_eq!(updated_row::<i32>(Err(sea_orm::DbErr::RecordNotUpdated)).unwrap(), None);
        let err = updated_row::<i32>(Err(sea_orm::DbErr::Custom("boom".into()))).unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("book").to_string(), "not found: book not found");
    }
}
