use poem::Request;
use poem_openapi::{ApiResponse, SecurityScheme, Tags, auth::Bearer};

use crate::coordinators::AuthCoordinator;
use crate::errors::InternalError;
use crate::types::internal::UserAccount;
use crate::types::internal::context::RequestContext;

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// API tags shared by every endpoint group
#[derive(Tags)]
pub enum ApiTags {
    /// Service status
    Health,
    /// Login and self-service credential endpoints
    Authentication,
    /// Employee records
    Employees,
    /// User accounts
    Users,
    /// Profiles and their menu assignments
    Profiles,
    /// Navigation menu
    Menu,
}

/// Build the request context and resolve the bearer token to an active account
///
/// The returned context carries the caller's user id as actor.
pub async fn authorize(
    auth_coordinator: &AuthCoordinator,
    req: &Request,
    auth: &BearerAuth,
) -> Result<(RequestContext, UserAccount), InternalError> {
    let ctx = RequestContext::from_request(req);
    let account = auth_coordinator.authenticate_bearer(&ctx, &auth.0.token).await?;
    let ctx = ctx.with_actor_id(account.id.to_string());
    Ok((ctx, account))
}

/// Empty success response for deletions
#[derive(ApiResponse)]
pub enum Deleted {
    /// The record was removed or deactivated
    #[oai(status = 204)]
    NoContent,
}

pub(crate) const DEFAULT_PAGE_SIZE: u64 = 100;
