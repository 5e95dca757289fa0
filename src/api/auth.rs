use std::sync::Arc;

use poem::Request;
use poem_openapi::param::Path;
use poem_openapi::payload::{Form, Json};
use poem_openapi::OpenApi;

use crate::api::helpers::{ApiTags, BearerAuth, authorize};
use crate::coordinators::AuthCoordinator;
use crate::errors::AuthError;
use crate::types::dto::auth::{ChangePasswordRequest, LoginForm, LoginRequest, MeResponse, TokenResponse};
use crate::types::dto::common::MessageResponse;
use crate::types::internal::context::RequestContext;

/// Authentication API endpoints
pub struct AuthApi {
    auth_coordinator: Arc<AuthCoordinator>,
}

impl AuthApi {
    /// Create a new AuthApi with the given AuthCoordinator
    pub fn new(auth_coordinator: Arc<AuthCoordinator>) -> Self {
        Self { auth_coordinator }
    }
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with username and password to receive an access token
    ///
    /// Each failed attempt counts against the account; once the limit is
    /// reached the account stays locked until an administrator resets it.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Authentication")]
    async fn login(&self, req: &Request, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, AuthError> {
        let ctx = RequestContext::from_request(req);
        let token = self
            .auth_coordinator
            .login(&ctx, &body.username, &body.password)
            .await
            .map_err(AuthError::from_internal_error)?;
        Ok(Json(token))
    }

    /// Form-encoded login for OAuth2 password-flow clients
    #[oai(path = "/login-form", method = "post", tag = "ApiTags::Authentication")]
    async fn login_form(&self, req: &Request, body: Form<LoginForm>) -> Result<Json<TokenResponse>, AuthError> {
        let ctx = RequestContext::from_request(req);
        let token = self
            .auth_coordinator
            .login(&ctx, &body.username, &body.password)
            .await
            .map_err(AuthError::from_internal_error)?;
        Ok(Json(token))
    }

    /// The authenticated caller's account
    #[oai(path = "/me", method = "get", tag = "ApiTags::Authentication")]
    async fn me(&self, req: &Request, auth: BearerAuth) -> Result<Json<MeResponse>, AuthError> {
        let (ctx, account) = authorize(&self.auth_coordinator, req, &auth)
            .await
            .map_err(AuthError::from_internal_error)?;
        let me = self
            .auth_coordinator
            .me(&ctx, &account)
            .await
            .map_err(AuthError::from_internal_error)?;
        Ok(Json(me))
    }

    /// Change the caller's own password
    #[oai(path = "/change-password", method = "post", tag = "ApiTags::Authentication")]
    async fn change_password(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<ChangePasswordRequest>,
    ) -> Result<Json<MessageResponse>, AuthError> {
        let (ctx, account) = authorize(&self.auth_coordinator, req, &auth)
            .await
            .map_err(AuthError::from_internal_error)?;
        self.auth_coordinator
            .change_password(&ctx, &account, &body.current_password, &body.new_password)
            .await
            .map_err(AuthError::from_internal_error)?;
        Ok(Json(MessageResponse::new("Password updated successfully")))
    }

    /// Clear a user's failed-attempt counter, unlocking the account
    #[oai(path = "/reset-attempts/:user_id", method = "post", tag = "ApiTags::Authentication")]
    async fn reset_attempts(
        &self,
        req: &Request,
        auth: BearerAuth,
        user_id: Path<i32>,
    ) -> Result<Json<MessageResponse>, AuthError> {
        let (ctx, _) = authorize(&self.auth_coordinator, req, &auth)
            .await
            .map_err(AuthError::from_internal_error)?;
        self.auth_coordinator
            .reset_attempts(&ctx, user_id.0)
            .await
            .map_err(AuthError::from_internal_error)?;
        Ok(Json(MessageResponse::new("Login attempts reset")))
    }
}
