//! Database migration command.

use backoffice_core::config::{AppConfig, StoreBackend};
use backoffice_core::error::AppError;
use backoffice_database::DatabasePool;

use crate::output;

/// Execute `migrate`
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if config.database.backend != StoreBackend::Postgres {
        output::print_warning("The memory backend has no schema; nothing to migrate.");
        return Ok(());
    }

    let db = DatabasePool::connect(&config.database).await?;
    println!("Migrating the documents schema...");
    let applied = db.migrate().await?;
    output::print_success(&format!("Schema is up to date ({applied} migrations)."));
    Ok(())
}
