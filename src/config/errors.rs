/// Failure while loading or validating a configuration setting
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Invalid setting '{setting_name}': {reason}")]
    InvalidSetting { setting_name: String, reason: String },

    #[error("Failed to parse setting '{setting_name}': {error}")]
    ParseError { setting_name: String, error: String },
}

impl ApplicationError {
    pub fn invalid(setting_name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn parse(setting_name: &str, error: impl Into<String>) -> Self {
        Self::ParseError {
            setting_name: setting_name.to_string(),
            error: error.into(),
        }
    }
}
