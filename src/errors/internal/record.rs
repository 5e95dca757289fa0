use thiserror::Error;

/// Errors raised by the administrative CRUD stores
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("{entity} with {field} '{value}' already exists")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Request references rows that do not exist or is missing required data
    #[error("{0}")]
    InvalidReference(String),
}

impl RecordError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound { entity, key: key.to_string() }
    }

    pub fn duplicate(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::Duplicate { entity, field, value: value.into() }
    }
}
