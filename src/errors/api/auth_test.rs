#[cfg(test)]
mod tests {
    use crate::errors::AuthError;
    use crate::errors::internal::{CredentialError, InternalError, LoginError, RecordError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let db_err = DbErr::RecordNotFound("test".to_string());
        let internal_err = InternalError::database("find_user_by_name", db_err);
        let auth_err = AuthError::from_internal_error(internal_err);
        
        assert!(matches!(auth_err, AuthError::InternalError(_)));
        assert_eq!(auth_err.message(), "An internal error occurred");
    }

    #[test]
    fn test_crypto_error_converts_to_internal_server_error() {
        let internal_err = InternalError::crypto("argon2_init", "invalid secret");
        let auth_err = AuthError::from_internal_error(internal_err);
        
        assert_eq!(auth_err.message(), "An internal error occurred");
    }

    #[test]
    fn test_invalid_credentials_keeps_remaining_attempts_text() {
        let internal_err = InternalError::Login(LoginError::InvalidCredentials { remaining_attempts: Some(1) });
        let auth_err = AuthError::from_internal_error(internal_err);
        
        assert!(matches!(auth_err, AuthError::InvalidCredentials(_)));
        assert_eq!(auth_err.message(), "Invalid username or password. Remaining attempts: 1");
    }

    #[test]
    fn test_locked_converts_to_forbidden() {
        let internal_err = InternalError::Login(LoginError::Locked { max_attempts: 3 });
        let auth_err = AuthError::from_internal_error(internal_err);
        
        match auth_err {
            AuthError::AccountLocked(json) => {
                assert_eq!(json.0.status_code, 403);
                assert_eq!(json.0.message, "User locked. Maximum 3 failed attempts");
            }
            other => panic!("Expected AccountLocked, got {:?}", other),
        }
    }

    #[test]
    fn test_inactive_converts_to_forbidden() {
        let auth_err = AuthError::from_internal_error(InternalError::Login(LoginError::Inactive));
        
        assert!(matches!(auth_err, AuthError::AccountInactive(_)));
        assert_eq!(auth_err.message(), "User inactive");
    }

    #[test]
    fn test_incorrect_password_converts_to_bad_request() {
        let internal_err = InternalError::Credential(CredentialError::IncorrectPassword);
        let auth_err = AuthError::from_internal_error(internal_err);
        
        match auth_err {
            AuthError::IncorrectPassword(json) => assert_eq!(json.0.status_code, 400),
            other => panic!("Expected IncorrectPassword, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_token_converts_correctly() {
        let internal_err = InternalError::Credential(CredentialError::ExpiredToken("jwt".to_string()));
        let auth_err = AuthError::from_internal_error(internal_err);
        
        assert_eq!(auth_err.message(), "JWT has expired");
    }

    #[test]
    fn test_record_error_is_not_exposed_in_auth_context() {
        let internal_err = InternalError::Record(RecordError::not_found("menu", 7));
        let auth_err = AuthError::from_internal_error(internal_err);
        
        assert!(matches!(auth_err, AuthError::InternalError(_)));
    }
}
