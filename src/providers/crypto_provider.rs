use std::sync::Arc;

use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use async_trait::async_trait;

use crate::config::SecretManager;
use crate::errors::internal::CredentialError;
use crate::errors::InternalError;

/// One-way password hashing primitive used by the authentication engine
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing (PHC) string
    async fn hash(&self, plaintext: &str) -> Result<String, InternalError>;

    /// Check a plaintext password against a stored hash
    ///
    /// A malformed stored hash verifies as `false`.
    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, InternalError>;
}

/// Argon2id hasher keyed with the application pepper
pub struct CryptoProvider {
    secret_manager: Arc<SecretManager>,
}

impl CryptoProvider {
    pub fn new(secret_manager: Arc<SecretManager>) -> Self {
        Self { secret_manager }
    }

    fn argon2(pepper: &[u8]) -> Result<Argon2<'_>, InternalError> {
        Argon2::new_with_secret(pepper, Algorithm::Argon2id, Version::V0x13, Params::default())
            .map_err(|e| InternalError::crypto("argon2_init", e.to_string()))
    }
}

#[async_trait]
impl CredentialHasher for CryptoProvider {
    async fn hash(&self, plaintext: &str) -> Result<String, InternalError> {
        let pepper = self.secret_manager.password_pepper().to_owned();
        let password = plaintext.to_owned();

        // Argon2 is CPU bound; keep it off the async workers
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut rand_core::OsRng);
            Self::argon2(pepper.as_bytes())?
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| InternalError::from(CredentialError::PasswordHashingFailed(e.to_string())))
        })
        .await
        .map_err(|e| InternalError::crypto("password_hash", e.to_string()))?
    }

    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, InternalError> {
        let pepper = self.secret_manager.password_pepper().to_owned();
        let password = plaintext.to_owned();
        let hashed = hashed.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = match PasswordHash::new(&hashed) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("Stored password hash could not be parsed: {}", e);
                    return Ok(false);
                }
            };
            Ok(Self::argon2(pepper.as_bytes())?
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok())
        })
        .await
        .map_err(|e| InternalError::crypto("password_verify", e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::test_secret_manager;

    fn provider_with_pepper(pepper: &str) -> CryptoProvider {
        CryptoProvider::new(Arc::new(test_secret_manager(pepper)))
    }

    #[tokio::test]
    async fn test_hash_is_argon2id_phc_string() {
        let crypto = provider_with_pepper("test-pepper-for-unit-tests");
        let hash = crypto.hash("admin123").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("admin123"));
    }

    #[tokio::test]
    async fn test_verify_accepts_correct_and_rejects_wrong_password() {
        let crypto = provider_with_pepper("test-pepper-for-unit-tests");
        let hash = crypto.hash("admin123").await.unwrap();

        assert!(crypto.verify("admin123", &hash).await.unwrap());
        assert!(!crypto.verify("admin124", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_hashes_differently() {
        let crypto = provider_with_pepper("test-pepper-for-unit-tests");

        let first = crypto.hash("usuario123").await.unwrap();
        let second = crypto.hash("usuario123").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_pepper_is_part_of_the_hash() {
        let hash = provider_with_pepper("first-pepper-value-1").hash("secret").await.unwrap();

        let other = provider_with_pepper("second-pepper-value-2");
        assert!(!other.verify("secret", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_verifies_false() {
        let crypto = provider_with_pepper("test-pepper-for-unit-tests");
        assert!(!crypto.verify("anything", "not-a-phc-string").await.unwrap());
    }
}
