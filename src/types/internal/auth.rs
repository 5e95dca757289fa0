use serde::{Deserialize, Serialize};

/// Identity handed to the token issuer after a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectClaims {
    pub user_id: i32,
    pub username: String,
    pub profile_id: Option<i32>,
}

/// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    pub username: String,

    pub profile_id: Option<i32>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Signed access token together with its lifetime
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}
