mod common;

use std::sync::Arc;

use async_trait::async_trait;
use business_security_backend::app_data::AppData;
use business_security_backend::coordinators::AuthCoordinator;
use business_security_backend::errors::internal::{CredentialError, LoginError};
use business_security_backend::errors::InternalError;
use business_security_backend::providers::crypto_provider::CredentialHasher;
use business_security_backend::providers::{AuthResult, AuthenticationProvider};
use business_security_backend::stores::{CredentialStore, DbCredentialStore, UserChanges};
use business_security_backend::types::db::RecordStatus;
use business_security_backend::types::internal::context::RequestContext;

fn login_error(result: Result<impl std::fmt::Debug, InternalError>) -> LoginError {
    match result {
        Err(InternalError::Login(err)) => err,
        other => panic!("Expected login error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_login_issues_token_resolving_to_the_account() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "alice", "correct-horse", Some(1)).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let token = coordinator.login(&ctx, "alice", "correct-horse").await.unwrap();
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.expires_in, 30 * 60);

    let account = coordinator.authenticate_bearer(&ctx, &token.access_token).await.unwrap();
    assert_eq!(account.id, created.id);
    assert_eq!(account.username, "alice");
}

#[tokio::test]
async fn test_wrong_passwords_count_down_then_lock_the_account() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "bob", "right-password", None).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let first = login_error(coordinator.login(&ctx, "bob", "wrong").await);
    assert_eq!(first.to_string(), "Invalid username or password. Remaining attempts: 2");

    let second = login_error(coordinator.login(&ctx, "bob", "wrong").await);
    assert_eq!(second, LoginError::InvalidCredentials { remaining_attempts: Some(1) });

    let third = login_error(coordinator.login(&ctx, "bob", "wrong").await);
    assert_eq!(third, LoginError::Locked { max_attempts: 3 });

    // The correct password no longer helps, and the counter stays put
    let locked = login_error(coordinator.login(&ctx, "bob", "right-password").await);
    assert_eq!(locked.to_string(), "User locked. Maximum 3 failed attempts");

    let stored = app_data.credential_store.find_user_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 3);
    assert_eq!(stored.status, RecordStatus::Active);
}

#[tokio::test]
async fn test_reset_attempts_unlocks_the_account() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "carol", "secret-pass", None).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_cli("reset_attempts");

    for _ in 0..3 {
        let _ = coordinator.login(&ctx, "carol", "nope").await;
    }
    assert!(matches!(
        login_error(coordinator.login(&ctx, "carol", "secret-pass").await),
        LoginError::Locked { .. }
    ));

    coordinator.reset_attempts(&ctx, created.id).await.unwrap();

    assert!(coordinator.login(&ctx, "carol", "secret-pass").await.is_ok());
}

#[tokio::test]
async fn test_successful_login_clears_earlier_failures() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "dave", "pw-dave", None).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let _ = coordinator.login(&ctx, "dave", "bad").await;
    let _ = coordinator.login(&ctx, "dave", "bad").await;
    coordinator.login(&ctx, "dave", "pw-dave").await.unwrap();

    let stored = app_data.credential_store.find_user_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 0);
}

#[tokio::test]
async fn test_unknown_user_and_inactive_user() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "erin", "pw-erin", None).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let unknown = login_error(coordinator.login(&ctx, "nobody", "whatever").await);
    assert_eq!(unknown, LoginError::InvalidCredentials { remaining_attempts: None });

    app_data
        .user_store
        .update(
            &app_data.db,
            created.id,
            UserChanges {
                status: Some(RecordStatus::Inactive),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let inactive = login_error(coordinator.login(&ctx, "erin", "pw-erin").await);
    assert_eq!(inactive, LoginError::Inactive);
}

#[tokio::test]
async fn test_bearer_for_deactivated_account_is_refused() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "frank", "pw-frank", None).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let token = coordinator.login(&ctx, "frank", "pw-frank").await.unwrap();
    app_data.user_store.deactivate(&app_data.db, created.id).await.unwrap();

    let err = coordinator.authenticate_bearer(&ctx, &token.access_token).await.unwrap_err();
    assert!(matches!(
        err,
        InternalError::Credential(CredentialError::UserNotActive { user_id }) if user_id == created.id
    ));
}

#[tokio::test]
async fn test_garbage_bearer_is_invalid_token() {
    let app_data = common::setup_app_data().await;
    let coordinator = AuthCoordinator::new(app_data);
    let ctx = RequestContext::for_system("test");

    let err = coordinator.authenticate_bearer(&ctx, "not.a.jwt").await.unwrap_err();
    assert!(matches!(err, InternalError::Credential(CredentialError::InvalidToken { .. })));
}

#[tokio::test]
async fn test_change_password_requires_current_password() {
    let app_data = common::setup_app_data().await;
    common::create_user(&app_data, "grace", "old-password", None).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let token = coordinator.login(&ctx, "grace", "old-password").await.unwrap();
    let account = coordinator.authenticate_bearer(&ctx, &token.access_token).await.unwrap();

    let err = coordinator
        .change_password(&ctx, &account, "not-it", "new-password")
        .await
        .unwrap_err();
    assert!(matches!(err, InternalError::Credential(CredentialError::IncorrectPassword)));

    coordinator
        .change_password(&ctx, &account, "old-password", "new-password")
        .await
        .unwrap();

    assert!(coordinator.login(&ctx, "grace", "old-password").await.is_err());
    assert!(coordinator.login(&ctx, "grace", "new-password").await.is_ok());
}

#[tokio::test]
async fn test_me_reports_profile_and_counter() {
    let app_data = common::setup_app_data().await;
    let profile = app_data
        .profile_store
        .create(&app_data.db, "Auditors".to_string(), RecordStatus::Active)
        .await
        .unwrap();
    common::create_user(&app_data, "heidi", "pw-heidi", Some(profile.id)).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::for_system("test");

    let _ = coordinator.login(&ctx, "heidi", "wrong").await;
    let token = coordinator.login(&ctx, "heidi", "pw-heidi").await.unwrap();
    let account = coordinator.authenticate_bearer(&ctx, &token.access_token).await.unwrap();

    let me = coordinator.me(&ctx, &account).await.unwrap();
    assert_eq!(me.username, "heidi");
    assert_eq!(me.profile_id, Some(profile.id));
    assert_eq!(me.profile_description.as_deref(), Some("Auditors"));
    assert_eq!(me.employee_name, None);
    assert_eq!(me.failed_attempts, 0);
    assert_eq!(me.status_id, RecordStatus::Active.id());
}

#[tokio::test]
async fn test_concurrent_failures_stop_at_the_threshold() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "ivan", "pw-ivan", None).await;
    let store = Arc::new(DbCredentialStore::new(app_data.db.clone()));

    let user_id = created.id;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(async move { store.record_failed_attempt(user_id, 3).await }));
    }

    let mut seen = Vec::new();
    for handle in handles {
        seen.push(handle.await.unwrap().unwrap());
    }
    seen.sort_unstable();

    assert_eq!(seen, vec![1, 2, 3, 3, 3, 3, 3, 3, 3, 3]);
    let stored = store.find_user_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_wrong_logins_never_exceed_the_threshold() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "ivy", "pw-ivy", None).await;
    let coordinator = Arc::new(AuthCoordinator::new(app_data.clone()));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let coordinator = coordinator.clone();
        handles.push(tokio::spawn(async move {
            let ctx = RequestContext::for_system("test");
            login_error(coordinator.login(&ctx, "ivy", "wrong").await)
        }));
    }

    let mut locked = 0;
    for handle in handles {
        match handle.await.unwrap() {
            LoginError::Locked { max_attempts } => {
                assert_eq!(max_attempts, 3);
                locked += 1;
            }
            LoginError::InvalidCredentials { remaining_attempts: Some(remaining) } => {
                assert!(remaining == 1 || remaining == 2);
            }
            other => panic!("Unexpected rejection: {:?}", other),
        }
    }

    assert_eq!(locked, 8);
    let stored = app_data.credential_store.find_user_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 3);
}

/// Runs a side effect against the database while a password is being
/// checked or hashed, the window in which an administrator may act
struct InterleavingHasher {
    inner: Arc<dyn CredentialHasher>,
    app_data: Arc<AppData>,
    user_id: i32,
    during: Interleave,
}

#[derive(Clone, Copy)]
enum Interleave {
    Deactivate,
    FailThreeTimes,
}

impl InterleavingHasher {
    async fn interleave(&self) {
        match self.during {
            Interleave::Deactivate => {
                self.app_data.user_store.deactivate(&self.app_data.db, self.user_id).await.unwrap();
            }
            Interleave::FailThreeTimes => {
                for _ in 0..3 {
                    self.app_data.credential_store.record_failed_attempt(self.user_id, 3).await.unwrap();
                }
            }
        }
    }
}

#[async_trait]
impl CredentialHasher for InterleavingHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, InternalError> {
        self.interleave().await;
        self.inner.hash(plaintext).await
    }

    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, InternalError> {
        self.interleave().await;
        self.inner.verify(plaintext, hashed).await
    }
}

fn interleaving_engine(app_data: &Arc<AppData>, user_id: i32, during: Interleave) -> AuthenticationProvider {
    let hasher = InterleavingHasher {
        inner: app_data.hasher.clone(),
        app_data: app_data.clone(),
        user_id,
        during,
    };
    AuthenticationProvider::new(app_data.credential_store.clone(), Arc::new(hasher), 3)
}

#[tokio::test]
async fn test_login_success_keeps_a_concurrent_deactivation() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "kate", "pw-kate", None).await;
    app_data.credential_store.record_failed_attempt(created.id, 3).await.unwrap();
    let engine = interleaving_engine(&app_data, created.id, Interleave::Deactivate);
    let ctx = RequestContext::for_system("test");

    let result = engine.authenticate(&ctx, "kate", "pw-kate").await.unwrap();
    assert!(matches!(result, AuthResult::Authenticated(_)));

    let stored = app_data.credential_store.find_user_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.status, RecordStatus::Inactive);
    assert_eq!(stored.failed_attempts, 0);
}

#[tokio::test]
async fn test_password_change_keeps_status_and_counter_written_meanwhile() {
    let app_data = common::setup_app_data().await;
    let created = common::create_user(&app_data, "leo", "pw-leo", None).await;
    let ctx = RequestContext::for_system("test");

    let deactivating = interleaving_engine(&app_data, created.id, Interleave::Deactivate);
    deactivating.change_credential(&ctx, created.id, "pw-leo", "pw-leo-2").await.unwrap();

    let stored = app_data.credential_store.find_user_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.status, RecordStatus::Inactive);
    assert!(app_data.hasher.verify("pw-leo-2", &stored.password_hash).await.unwrap());

    let other = common::create_user(&app_data, "lena", "pw-lena", None).await;
    let failing = interleaving_engine(&app_data, other.id, Interleave::FailThreeTimes);
    failing.change_credential(&ctx, other.id, "pw-lena", "pw-lena-2").await.unwrap();

    let stored = app_data.credential_store.find_user_by_id(other.id).await.unwrap().unwrap();
    assert_eq!(stored.failed_attempts, 3);
    assert_eq!(stored.status, RecordStatus::Active);
}

#[tokio::test]
async fn test_configured_threshold_is_respected() {
    let env = common::TestEnvironment::standard().with_var("MAX_LOGIN_ATTEMPTS", "1");
    let app_data = common::setup_app_data_with_env(env).await;
    common::create_user(&app_data, "judy", "pw-judy", None).await;
    let coordinator = AuthCoordinator::new(app_data);
    let ctx = RequestContext::for_system("test");

    let first = login_error(coordinator.login(&ctx, "judy", "wrong").await);
    assert_eq!(first, LoginError::Locked { max_attempts: 1 });
}
