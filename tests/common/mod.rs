// Common test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use business_security_backend::app_data::AppData;
use business_security_backend::config::{
    ApplicationSettings, EnvironmentProvider, SecretManager, connect_database, migrate_database,
};
use business_security_backend::stores::NewUser;
use business_security_backend::types::db::{RecordStatus, user};
use sea_orm::DatabaseConnection;

pub const TEST_JWT_SECRET: &str = "integration-test-jwt-secret-with-32-chars";
pub const TEST_PEPPER: &str = "integration-pepper-16";

/// Environment provider backed by a fixed map
#[derive(Default)]
pub struct TestEnvironment {
    vars: HashMap<String, String>,
}

impl TestEnvironment {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Secrets and a three-attempt lockout
    pub fn standard() -> Self {
        Self::default()
            .with_var("JWT_SECRET", TEST_JWT_SECRET)
            .with_var("PASSWORD_PEPPER", TEST_PEPPER)
            .with_var("MAX_LOGIN_ATTEMPTS", "3")
    }
}

impl EnvironmentProvider for TestEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = connect_database("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    migrate_database(&db).await.expect("Failed to run migrations");

    db
}

/// Fully wired application over a fresh database
pub async fn setup_app_data() -> Arc<AppData> {
    setup_app_data_with_env(TestEnvironment::standard()).await
}

pub async fn setup_app_data_with_env(env: TestEnvironment) -> Arc<AppData> {
    let db = setup_test_db().await;
    let env: Arc<dyn EnvironmentProvider + Send + Sync> = Arc::new(env);

    let settings = ApplicationSettings::from_env_provider(env.clone()).expect("Failed to load settings");
    let secrets = SecretManager::init_with_env(env).expect("Failed to load secrets");

    Arc::new(AppData::init(db, settings, secrets))
}

/// Insert an active user with a real argon2 hash
pub async fn create_user(app_data: &AppData, username: &str, password: &str, profile_id: Option<i32>) -> user::Model {
    let password_hash = app_data.hasher.hash(password).await.expect("Failed to hash password");

    app_data
        .user_store
        .create(
            &app_data.db,
            NewUser {
                username: username.to_string(),
                password_hash,
                profile_id,
                status: RecordStatus::Active,
                employee_id: None,
            },
        )
        .await
        .expect("Failed to create user")
}

/// Helper to manage environment variables in tests
///
/// Cleans up specified environment variables on creation and drop,
/// ensuring test isolation when dealing with global environment state.
pub struct EnvGuard {
    vars: Vec<String>,
}

impl EnvGuard {
    pub fn new(vars: Vec<&str>) -> Self {
        // Clean up before setting new values
        for var in &vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
        Self {
            vars: vars.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}

/// Global mutex for tests that modify environment variables
///
/// Environment variables are process-global, so tests that modify them
/// must run serially to avoid race conditions.
pub static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());
