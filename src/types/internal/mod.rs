// Internal domain types shared by stores, providers and coordinators
pub mod account;
pub mod auth;
pub mod context;
pub mod menu;

pub use account::UserAccount;
pub use auth::{Claims, IssuedToken, SubjectClaims};
pub use context::{RequestContext, RequestId, RequestSource};
pub use menu::{MenuNode, MenuTreeNode};
