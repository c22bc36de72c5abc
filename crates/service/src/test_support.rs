#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_and_migrate, in_memory_config};

/// Migrated in-memory database, private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&in_memory_config()).await
}
