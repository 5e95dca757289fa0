mod application_settings;
mod bootstrap_settings;
mod config_spec;
mod database;
mod env_provider;
mod errors;
mod logging;
mod secret_config;
mod secret_manager;

pub use application_settings::ApplicationSettings;
pub use bootstrap_settings::BootstrapSettings;
pub use config_spec::ConfigSpec;
pub use database::{connect_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use secret_config::SecretConfig;
pub use secret_manager::{SecretError, SecretManager};
