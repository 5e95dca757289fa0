// Providers layer - Work performers and business logic
//
// Providers hold the business rules coordinators orchestrate: the login
// state machine, menu tree assembly, password hashing and token issuance.

pub mod authentication_provider;
pub mod crypto_provider;
pub mod menu_provider;
pub mod token_provider;

pub use authentication_provider::{AuthResult, AuthenticationProvider, LoginRejection};
pub use crypto_provider::{CredentialHasher, CryptoProvider};
pub use menu_provider::{build_menu_tree, MenuProvider};
pub use token_provider::{TokenIssuer, TokenProvider};
