// Test utilities shared across unit tests
// Only compiled when running tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{MockEnvironment, SecretManager};
use crate::errors::internal::RecordError;
use crate::errors::InternalError;
use crate::providers::CredentialHasher;
use crate::stores::CredentialStore;
use crate::types::db::RecordStatus;
use crate::types::internal::{MenuNode, UserAccount};

pub const TEST_JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";

/// SecretManager built from a mock environment with the given pepper
pub fn test_secret_manager(pepper: &str) -> SecretManager {
    let env = MockEnvironment::empty().with_vars(&[("JWT_SECRET", TEST_JWT_SECRET), ("PASSWORD_PEPPER", pepper)]);
    SecretManager::init_with_env(Arc::new(env)).expect("test secrets are valid")
}

/// Active account on profile 1 whose stored hash is `fake$<password>`
pub fn account(id: i32, username: &str, password: &str, failed_attempts: u32) -> UserAccount {
    UserAccount {
        id,
        username: username.to_string(),
        password_hash: format!("fake${}", password),
        profile_id: Some(1),
        status: RecordStatus::Active,
        failed_attempts,
        employee_id: None,
    }
}

pub fn menu_node(id: i32, parent_id: Option<i32>, sort_order: i32, status: RecordStatus) -> MenuNode {
    MenuNode {
        id,
        description: format!("Menu {}", id),
        url: parent_id.map(|_| format!("/menu/{}", id)),
        parent_id,
        level: if parent_id.is_some() { 1 } else { 0 },
        sort_order,
        status,
        created_at: 0,
    }
}

/// Deterministic hasher: `hash(p) = "fake$" + p`
pub struct FakeHasher;

#[async_trait]
impl CredentialHasher for FakeHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, InternalError> {
        Ok(format!("fake${}", plaintext))
    }

    async fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, InternalError> {
        Ok(hashed.strip_prefix("fake$") == Some(plaintext))
    }
}

/// CredentialStore over in-memory maps
#[derive(Default)]
pub struct InMemoryCredentialStore {
    accounts: Mutex<HashMap<i32, UserAccount>>,
    assignments: HashMap<i32, Vec<MenuNode>>,
}

impl InMemoryCredentialStore {
    pub fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: Mutex::new(accounts.into_iter().map(|a| (a.id, a)).collect()),
            assignments: HashMap::new(),
        }
    }

    pub fn with_assignments(mut self, profile_id: i32, menus: Vec<MenuNode>) -> Self {
        self.assignments.insert(profile_id, menus);
        self
    }

    pub fn failed_attempts(&self, user_id: i32) -> u32 {
        self.accounts.lock().unwrap()[&user_id].failed_attempts
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_user_by_name(&self, username: &str) -> Result<Option<UserAccount>, InternalError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn find_user_by_id(&self, user_id: i32) -> Result<Option<UserAccount>, InternalError> {
        Ok(self.accounts.lock().unwrap().get(&user_id).cloned())
    }

    async fn reset_failed_attempts(&self, user_id: i32) -> Result<(), InternalError> {
        if let Some(stored) = self.accounts.lock().unwrap().get_mut(&user_id) {
            stored.failed_attempts = 0;
        }
        Ok(())
    }

    async fn set_password_hash(&self, user_id: i32, password_hash: String) -> Result<(), InternalError> {
        let mut accounts = self.accounts.lock().unwrap();
        let stored = accounts
            .get_mut(&user_id)
            .ok_or_else(|| InternalError::from(RecordError::not_found("user", user_id)))?;
        stored.password_hash = password_hash;
        Ok(())
    }

    async fn record_failed_attempt(&self, user_id: i32, max_attempts: u32) -> Result<u32, InternalError> {
        let mut accounts = self.accounts.lock().unwrap();
        let stored = accounts
            .get_mut(&user_id)
            .ok_or_else(|| InternalError::from(RecordError::not_found("user", user_id)))?;
        if stored.failed_attempts < max_attempts {
            stored.failed_attempts += 1;
        }
        Ok(stored.failed_attempts)
    }

    async fn assigned_menus(&self, profile_id: i32) -> Result<Vec<MenuNode>, InternalError> {
        Ok(self.assignments.get(&profile_id).cloned().unwrap_or_default())
    }
}
