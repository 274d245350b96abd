//! Platform-level manager accounts and roles.

pub mod account;
pub mod role;

pub use account::{DEPLOY_MODE_KEY, ManagerAccount, STANDALONE_MODE_VALUE};
pub use role::ManagerRole;
