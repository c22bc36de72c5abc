/// CRUD and relation tests for the seller/book entities
pub mod crud_tests;

use sea_orm::DatabaseConnection;

use crate::db;

/// Fresh, migrated in-memory database for a single test.
pub async fn test_db() -> anyhow::Result<DatabaseConnection> {
    db::connect_and_migrate(&db::in_memory_config()).await
}
