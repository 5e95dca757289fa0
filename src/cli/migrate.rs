use crate::config::{BootstrapSettings, connect_database, migrate_database};

/// Run database migrations
///
/// Connects and applies all pending migrations. It does not initialize the
/// full AppData structure, so no secrets are needed.
pub async fn run_migrations(bootstrap: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let db = connect_database(bootstrap.database_url()).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");
    println!("✅ Migrations applied");

    Ok(())
}
