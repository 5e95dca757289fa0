use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::internal::CredentialError;
use crate::errors::InternalError;
use crate::providers::{AuthenticationProvider, TokenIssuer};
use crate::stores::{CredentialStore, UserStore};
use crate::types::dto::auth::{MeResponse, TokenResponse};
use crate::types::internal::context::RequestContext;
use crate::types::internal::UserAccount;

/// Orchestrates login, bearer resolution and self-service credential changes
pub struct AuthCoordinator {
    db: DatabaseConnection,
    authentication_provider: Arc<AuthenticationProvider>,
    token_issuer: Arc<dyn TokenIssuer>,
    credential_store: Arc<dyn CredentialStore>,
    user_store: Arc<UserStore>,
}

impl AuthCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        let authentication_provider = Arc::new(AuthenticationProvider::new(
            app_data.credential_store.clone(),
            app_data.hasher.clone(),
            app_data.settings.max_login_attempts(),
        ));

        Self {
            db: app_data.db.clone(),
            authentication_provider,
            token_issuer: app_data.token_issuer.clone(),
            credential_store: app_data.credential_store.clone(),
            user_store: app_data.user_store.clone(),
        }
    }

    /// Run the lockout policy and issue an access token on success
    ///
    /// Refusals come back as `InternalError::Login` carrying the client-facing
    /// message.
    pub async fn login(
        &self,
        ctx: &RequestContext,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, InternalError> {
        let subject = self
            .authentication_provider
            .authenticate(ctx, username, password)
            .await?
            .into_result()?;

        let issued = self.token_issuer.issue(&subject)?;
        Ok(issued.into())
    }

    /// Resolve a bearer token to the active account it names
    pub async fn authenticate_bearer(&self, ctx: &RequestContext, token: &str) -> Result<UserAccount, InternalError> {
        let claims = self.token_issuer.decode(token)?;

        let user_id: i32 = claims
            .sub
            .parse()
            .map_err(|_| CredentialError::invalid_token("jwt", "subject is not a user id"))?;

        let account = self
            .credential_store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| CredentialError::invalid_token("jwt", "subject does not exist"))?;

        if !account.status.is_active() {
            tracing::debug!(request_id = %ctx.request_id, user_id, "Token for inactive account");
            return Err(CredentialError::UserNotActive { user_id }.into());
        }

        Ok(account)
    }

    pub async fn me(&self, _ctx: &RequestContext, account: &UserAccount) -> Result<MeResponse, InternalError> {
        let user = self.user_store.get_by_id(&self.db, account.id).await?;
        let (employee_name, profile_description) = self.user_store.display_names(&self.db, &user).await?;

        Ok(MeResponse {
            user_id: user.id,
            username: user.username,
            profile_id: user.profile_id,
            status_id: user.status_id.id(),
            employee_id: user.employee_id,
            failed_attempts: user.failed_attempts,
            employee_name,
            profile_description,
        })
    }

    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        account: &UserAccount,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), InternalError> {
        self.authentication_provider
            .change_credential(ctx, account.id, current_password, new_password)
            .await
    }

    pub async fn reset_attempts(&self, ctx: &RequestContext, user_id: i32) -> Result<(), InternalError> {
        self.authentication_provider.reset_attempts(ctx, user_id).await
    }
}
