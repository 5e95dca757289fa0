use std::sync::Arc;

use crate::config::{ApplicationError, EnvironmentProvider};

/// Specification of one environment-backed setting
///
/// Resolution order is environment variable, then default. The resolved value
/// is validated before it is returned.
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub env_var: Option<String>,
    pub default_value: Option<String>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_var: None,
            default_value: None,
            required: false,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_var = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    fn setting_name(&self) -> &str {
        self.env_var.as_deref().unwrap_or("unknown_setting")
    }

    /// Resolve the setting value
    pub fn load(&self) -> Result<String, ApplicationError> {
        let from_env = self
            .env_var
            .as_deref()
            .and_then(|name| self.env_provider.get_var(name));

        let value = match (from_env, &self.default_value) {
            (Some(value), _) => value,
            (None, Some(default)) => default.clone(),
            (None, None) if self.required => {
                return Err(ApplicationError::invalid(
                    self.setting_name(),
                    "Required setting has no value from any source",
                ));
            }
            (None, None) => String::new(),
        };

        self.validate_value(&value)?;
        Ok(value)
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::invalid(
                    self.setting_name(),
                    format!("Value must be at least {} characters long", min_len),
                ));
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::invalid(self.setting_name(), reason))?;
        }

        Ok(())
    }
}

/// Type parsing utilities for configuration values
impl ConfigSpec {
    pub fn parse_integer(value: &str, setting_name: &str) -> Result<i64, ApplicationError> {
        value
            .trim()
            .parse::<i64>()
            .map_err(|e| ApplicationError::parse(setting_name, format!("Expected integer, got '{}': {}", value, e)))
    }

    /// Parse a port number, rejecting 0
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value.trim().parse::<u16>().map_err(|e| {
            ApplicationError::parse(
                setting_name,
                format!("Expected port number (1-65535), got '{}': {}", value, e),
            )
        })?;

        if port == 0 {
            return Err(ApplicationError::invalid(
                setting_name,
                "Port number must be between 1 and 65535",
            ));
        }

        Ok(port)
    }

    /// Split a comma-separated list, dropping blank entries
    pub fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Validators usable with [`ConfigSpec::validator`]
impl ConfigSpec {
    pub fn validate_integer_range(value: &str, min: i64, max: i64) -> Result<(), String> {
        let parsed = value
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("Expected integer between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Value {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value
            .trim()
            .parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    pub fn validate_host_address(value: &str) -> Result<(), String> {
        let host = value.trim();
        if host.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }
        if host.chars().any(char::is_whitespace) {
            return Err("Host address cannot contain whitespace characters".to_string());
        }
        Ok(())
    }
}
