use std::sync::Arc;

use crate::errors::internal::{CredentialError, LoginError};
use crate::errors::InternalError;
use crate::providers::crypto_provider::CredentialHasher;
use crate::stores::CredentialStore;
use crate::types::internal::auth::SubjectClaims;
use crate::types::internal::context::RequestContext;

/// Why a login was refused short of a lockout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRejection {
    /// Wrong password or unknown user; the count is absent for the latter
    InvalidCredentials { remaining_attempts: Option<u32> },
    Inactive,
}

impl From<LoginRejection> for LoginError {
    fn from(reason: LoginRejection) -> Self {
        match reason {
            LoginRejection::InvalidCredentials { remaining_attempts } => {
                LoginError::InvalidCredentials { remaining_attempts }
            }
            LoginRejection::Inactive => LoginError::Inactive,
        }
    }
}

/// Outcome of a single login attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AuthResult {
    Authenticated(SubjectClaims),
    Rejected(LoginRejection),
    Locked { max_attempts: u32 },
}

impl AuthResult {
    pub fn into_result(self) -> Result<SubjectClaims, LoginError> {
        match self {
            AuthResult::Authenticated(subject) => Ok(subject),
            AuthResult::Rejected(reason) => Err(reason.into()),
            AuthResult::Locked { max_attempts } => Err(LoginError::Locked { max_attempts }),
        }
    }
}

/// Login and lockout state machine
///
/// Holds no account state of its own. Every call reads the account from the
/// store and applies each change as a single-column write.
pub struct AuthenticationProvider {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn CredentialHasher>,
    max_attempts: u32,
}

impl AuthenticationProvider {
    pub fn new(store: Arc<dyn CredentialStore>, hasher: Arc<dyn CredentialHasher>, max_attempts: u32) -> Self {
        Self {
            store,
            hasher,
            max_attempts,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Run one login attempt through the lockout policy
    ///
    /// Checks run in order and stop at the first hit: unknown user, lockout
    /// threshold reached, account not active, then the password itself.
    pub async fn authenticate(
        &self,
        ctx: &RequestContext,
        username: &str,
        password: &str,
    ) -> Result<AuthResult, InternalError> {
        if username.is_empty() || password.is_empty() {
            return Ok(AuthResult::Rejected(LoginRejection::InvalidCredentials {
                remaining_attempts: None,
            }));
        }

        let Some(account) = self.store.find_user_by_name(username).await? else {
            tracing::debug!(request_id = %ctx.request_id, "Login for unknown username");
            return Ok(AuthResult::Rejected(LoginRejection::InvalidCredentials {
                remaining_attempts: None,
            }));
        };

        if account.failed_attempts >= self.max_attempts {
            tracing::warn!(
                request_id = %ctx.request_id,
                user_id = account.id,
                "Login refused for locked account"
            );
            return Ok(AuthResult::Locked {
                max_attempts: self.max_attempts,
            });
        }

        if !account.status.is_active() {
            return Ok(AuthResult::Rejected(LoginRejection::Inactive));
        }

        if !self.hasher.verify(password, &account.password_hash).await? {
            let failed_attempts = self.store.record_failed_attempt(account.id, self.max_attempts).await?;
            let remaining = self.max_attempts.saturating_sub(failed_attempts);

            if remaining > 0 {
                tracing::debug!(
                    request_id = %ctx.request_id,
                    user_id = account.id,
                    failed_attempts,
                    "Wrong password"
                );
                return Ok(AuthResult::Rejected(LoginRejection::InvalidCredentials {
                    remaining_attempts: Some(remaining),
                }));
            }

            tracing::warn!(
                request_id = %ctx.request_id,
                user_id = account.id,
                "Account locked after {} failed attempts",
                failed_attempts
            );
            return Ok(AuthResult::Locked {
                max_attempts: self.max_attempts,
            });
        }

        if account.failed_attempts > 0 {
            self.store.reset_failed_attempts(account.id).await?;
        }

        tracing::info!(request_id = %ctx.request_id, user_id = account.id, "User logged in");

        Ok(AuthResult::Authenticated(SubjectClaims {
            user_id: account.id,
            username: account.username,
            profile_id: account.profile_id,
        }))
    }

    /// Replace the password after checking the current one
    ///
    /// A wrong current password does not touch the failed-attempt counter.
    pub async fn change_credential(
        &self,
        ctx: &RequestContext,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), InternalError> {
        let account = self
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or(CredentialError::UserIdNotFound { user_id })?;

        if !self.hasher.verify(current_password, &account.password_hash).await? {
            return Err(CredentialError::IncorrectPassword.into());
        }

        let password_hash = self.hasher.hash(new_password).await?;
        self.store.set_password_hash(account.id, password_hash).await?;

        tracing::info!(request_id = %ctx.request_id, user_id, "Password changed");
        Ok(())
    }

    /// Clear the failed-attempt counter; unknown ids are ignored
    pub async fn reset_attempts(&self, ctx: &RequestContext, user_id: i32) -> Result<(), InternalError> {
        if let Some(account) = self.store.find_user_by_id(user_id).await? {
            self.store.reset_failed_attempts(account.id).await?;
            tracing::info!(request_id = %ctx.request_id, user_id, actor = %ctx.actor_id, "Login attempts reset");
        }
        Ok(())
    }
}
