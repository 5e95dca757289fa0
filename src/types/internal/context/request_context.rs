use std::net::IpAddr;

use poem::Request;

use super::{request_id::RequestId, request_source::RequestSource};

/// Request context that flows through all layers
///
/// Carries what the coordinators and providers need to correlate log lines
/// for one request: where it came from and who is acting.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Unique identifier for this request (for tracing across layers)
    pub request_id: RequestId,

    /// Source of the request (API, CLI, or System)
    pub source: RequestSource,

    /// Actor who initiated the operation
    pub actor_id: String,
}

impl RequestContext {
    /// Create a RequestContext for an HTTP request
    ///
    /// The actor is anonymous until the bearer token has been resolved.
    pub fn from_request(req: &Request) -> Self {
        Self {
            ip_address: Self::extract_ip_address(req),
            request_id: RequestId::new(),
            source: RequestSource::API,
            actor_id: "anonymous".to_owned(),
        }
    }

    /// Create a RequestContext for CLI operations
    pub fn for_cli(command_name: &str) -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::new(),
            source: RequestSource::CLI,
            actor_id: format!("cli:{}", command_name),
        }
    }

    /// Create a RequestContext for system operations
    pub fn for_system(operation_name: &str) -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::new(),
            source: RequestSource::System,
            actor_id: format!("system:{}", operation_name),
        }
    }

    /// Extract IP address from request headers
    ///
    /// Checks X-Forwarded-For, X-Real-IP, and falls back to remote address.
    fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Check X-Forwarded-For header (proxy/load balancer)
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // Check X-Real-IP header (nginx)
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.parse().ok();
        }

        // Fall back to remote address
        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }

    /// Set the actor_id
    pub fn with_actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = actor_id.into();
        self
    }
}
