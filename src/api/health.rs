use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{OpenApi, payload::Json};

use crate::api::helpers::ApiTags;
use crate::config::ApplicationSettings;
use crate::types::dto::common::{HealthResponse, RootResponse};

/// Service information and health check
pub struct HealthApi {
    settings: Arc<ApplicationSettings>,
}

impl HealthApi {
    pub fn new(settings: Arc<ApplicationSettings>) -> Self {
        Self { settings }
    }
}

#[OpenApi]
impl HealthApi {
    /// Service name, version and status
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn root(&self) -> Json<RootResponse> {
        Json(RootResponse {
            message: self.settings.app_name().to_string(),
            version: self.settings.app_version().to_string(),
            status: "active".to_string(),
        })
    }

    /// Health check endpoint
    ///
    /// Returns the current status of the API service
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
