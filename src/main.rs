use std::sync::Arc;

use clap::Parser;

use business_security_backend::app_data::AppData;
use business_security_backend::cli::{self, Cli, Commands};
use business_security_backend::config::{
    ApplicationSettings, BootstrapSettings, LoggingConfig, SecretManager, SystemEnvironment, connect_database,
    init_logging, migrate_database,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env into the process environment before any provider reads it
    dotenv::dotenv().ok();

    let logging_config = LoggingConfig::from_env_provider(&SystemEnvironment);
    init_logging(&logging_config)?;

    let cli = Cli::parse();
    let command = cli.command();

    let bootstrap = BootstrapSettings::from_env()?;

    if command == Commands::Migrate {
        return cli::migrate::run_migrations(&bootstrap).await;
    }

    let db = connect_database(bootstrap.database_url()).await?;
    migrate_database(&db).await?;
    tracing::info!("Database ready");

    let settings = ApplicationSettings::from_env()?;
    let secret_manager = SecretManager::init()?;

    let app_data = Arc::new(AppData::init(db, settings, secret_manager));

    cli::execute_command(command, app_data, &bootstrap).await
}
