use std::fmt;
use std::sync::Arc;

use crate::config::{EnvironmentProvider, SecretConfig, SystemEnvironment};

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("Required secret '{secret_name}' is missing")]
    Missing { secret_name: String },

    #[error("Secret '{secret_name}' must be at least {expected} characters, got {actual}")]
    InvalidLength {
        secret_name: String,
        expected: usize,
        actual: usize,
    },
}

/// Centralized manager for application secrets
pub struct SecretManager {
    jwt_secret: String,
    password_pepper: String,
}

impl SecretManager {
    /// Load and validate all secrets from the process environment
    pub fn init() -> Result<Self, SecretError> {
        Self::init_with_env(Arc::new(SystemEnvironment))
    }

    pub fn init_with_env(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, SecretError> {
        let jwt_secret = Self::load_secret(env_provider.as_ref(), &Self::jwt_config())?;
        let password_pepper = Self::load_secret(env_provider.as_ref(), &Self::pepper_config())?;

        Ok(Self {
            jwt_secret,
            password_pepper,
        })
    }

    fn jwt_config() -> SecretConfig {
        SecretConfig::env_var("JWT_SECRET").required(true).min_length(32)
    }

    fn pepper_config() -> SecretConfig {
        SecretConfig::env_var("PASSWORD_PEPPER").required(true).min_length(16)
    }

    /// HS256 signing key for access tokens
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Argon2 secret parameter for password hashing
    pub fn password_pepper(&self) -> &str {
        &self.password_pepper
    }

    fn load_secret(env: &(dyn EnvironmentProvider + Send + Sync), config: &SecretConfig) -> Result<String, SecretError> {
        let value = match env.get_var(&config.name) {
            Some(v) => v,
            None if !config.required => return Ok(String::new()),
            None => {
                return Err(SecretError::Missing {
                    secret_name: config.name.clone(),
                });
            }
        };

        if let Some(min_len) = config.min_length {
            if value.len() < min_len {
                return Err(SecretError::InvalidLength {
                    secret_name: config.name.clone(),
                    expected: min_len,
                    actual: value.len(),
                });
            }
        }

        Ok(value)
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretManager {{ secrets_loaded: 2 }}")
    }
}
