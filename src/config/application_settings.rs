use std::fmt;
use std::sync::Arc;

use crate::config::{ApplicationError, ConfigSpec, EnvironmentProvider, SystemEnvironment};

/// Business settings resolved once at startup
#[derive(Clone)]
pub struct ApplicationSettings {
    max_login_attempts: u32,
    access_token_expire_minutes: i64,
    allowed_origins: Vec<String>,
    app_name: String,
    app_version: String,
}

impl ApplicationSettings {
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let attempts = ConfigSpec::new(env_provider.clone())
            .env_override("MAX_LOGIN_ATTEMPTS")
            .default_value("3")
            .validator(|v| ConfigSpec::validate_integer_range(v, 1, 100))
            .load()?;
        let max_login_attempts = u32::try_from(ConfigSpec::parse_integer(&attempts, "MAX_LOGIN_ATTEMPTS")?)
            .map_err(|e| ApplicationError::parse("MAX_LOGIN_ATTEMPTS", e.to_string()))?;

        let expire = ConfigSpec::new(env_provider.clone())
            .env_override("ACCESS_TOKEN_EXPIRE_MINUTES")
            .default_value("30")
            .validator(|v| ConfigSpec::validate_integer_range(v, 1, 7 * 24 * 60))
            .load()?;
        let access_token_expire_minutes = ConfigSpec::parse_integer(&expire, "ACCESS_TOKEN_EXPIRE_MINUTES")?;

        let origins = ConfigSpec::new(env_provider.clone())
            .env_override("ALLOWED_ORIGINS")
            .default_value("http://localhost:4200,http://localhost:8100")
            .load()?;

        let app_name = ConfigSpec::new(env_provider.clone())
            .env_override("APP_NAME")
            .default_value("Business Security API")
            .min_length(1)
            .load()?;

        let app_version = ConfigSpec::new(env_provider)
            .env_override("APP_VERSION")
            .default_value(env!("CARGO_PKG_VERSION"))
            .min_length(1)
            .load()?;

        Ok(Self {
            max_login_attempts,
            access_token_expire_minutes,
            allowed_origins: ConfigSpec::parse_list(&origins),
            app_name,
            app_version,
        })
    }

    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    /// Consecutive failures after which an account is locked
    pub fn max_login_attempts(&self) -> u32 {
        self.max_login_attempts
    }

    pub fn access_token_expire_minutes(&self) -> i64 {
        self.access_token_expire_minutes
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl fmt::Debug for ApplicationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationSettings")
            .field("max_login_attempts", &self.max_login_attempts)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("allowed_origins", &self.allowed_origins)
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .finish()
    }
}
