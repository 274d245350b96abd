//! Merchant staff accounts and their roles.

pub mod account;
pub mod role;

pub use account::Account;
pub use role::{Permissions, Role};
