use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::SecretManager;
use crate::errors::internal::CredentialError;
use crate::errors::InternalError;
use crate::types::internal::auth::{Claims, IssuedToken, SubjectClaims};

/// Issues and verifies signed, time-bound access tokens
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &SubjectClaims) -> Result<IssuedToken, InternalError>;

    fn decode(&self, token: &str) -> Result<Claims, InternalError>;
}

/// HS256 JWT implementation of [`TokenIssuer`]
pub struct TokenProvider {
    secret_manager: Arc<SecretManager>,
    jwt_expiration_minutes: i64,
}

impl TokenProvider {
    pub fn new(secret_manager: Arc<SecretManager>, jwt_expiration_minutes: i64) -> Self {
        Self {
            secret_manager,
            jwt_expiration_minutes,
        }
    }

    pub fn expires_in_seconds(&self) -> i64 {
        self.jwt_expiration_minutes * 60
    }
}

impl TokenIssuer for TokenProvider {
    fn issue(&self, subject: &SubjectClaims) -> Result<IssuedToken, InternalError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.user_id.to_string(),
            username: subject.username.clone(),
            profile_id: subject.profile_id,
            iat: now,
            exp: now + self.expires_in_seconds(),
        };

        let access_token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
        )
        .map_err(|e| InternalError::crypto("jwt_generation", format!("Failed to generate JWT: {}", e)))?;

        tracing::debug!(user_id = subject.user_id, "Issued access token");

        Ok(IssuedToken {
            access_token,
            expires_in: self.expires_in_seconds(),
        })
    }

    fn decode(&self, token: &str) -> Result<Claims, InternalError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => InternalError::from(CredentialError::ExpiredToken("jwt".to_string())),
            _ => InternalError::from(CredentialError::invalid_token("jwt", "invalid signature or malformed")),
        })
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("secret_manager", &"<redacted>")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}
