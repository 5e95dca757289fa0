use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{ApplicationSettings, SecretManager};
use crate::providers::{CredentialHasher, CryptoProvider, TokenIssuer, TokenProvider};
use crate::stores::{CredentialStore, DbCredentialStore, EmployeeStore, MenuStore, ProfileStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once and shared across coordinators.
///
/// ```text
/// main.rs / cli
///   ↓
/// AppData::init(db, settings, secrets)
///   ↓ creates once
///   ├─ credential_store (Arc<dyn CredentialStore>)
///   ├─ employee/user/profile/menu stores
///   ├─ hasher (Arc<dyn CredentialHasher>)
///   └─ token_issuer (Arc<dyn TokenIssuer>)
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to coordinators
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub settings: Arc<ApplicationSettings>,
    pub secret_manager: Arc<SecretManager>,
    pub credential_store: Arc<dyn CredentialStore>,
    pub employee_store: Arc<EmployeeStore>,
    pub user_store: Arc<UserStore>,
    pub profile_store: Arc<ProfileStore>,
    pub menu_store: Arc<MenuStore>,
    pub hasher: Arc<dyn CredentialHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl AppData {
    /// Wire stores and shared providers around an already migrated connection
    pub fn init(db: DatabaseConnection, settings: ApplicationSettings, secret_manager: SecretManager) -> Self {
        tracing::debug!("Initializing AppData");

        let settings = Arc::new(settings);
        let secret_manager = Arc::new(secret_manager);

        let hasher: Arc<dyn CredentialHasher> = Arc::new(CryptoProvider::new(secret_manager.clone()));
        let token_issuer: Arc<dyn TokenIssuer> = Arc::new(TokenProvider::new(
            secret_manager.clone(),
            settings.access_token_expire_minutes(),
        ));

        Self {
            credential_store: Arc::new(DbCredentialStore::new(db.clone())),
            employee_store: Arc::new(EmployeeStore::new()),
            user_store: Arc::new(UserStore::new()),
            profile_store: Arc::new(ProfileStore::new()),
            menu_store: Arc::new(MenuStore::new()),
            db,
            settings,
            secret_manager,
            hasher,
            token_issuer,
        }
    }
}
