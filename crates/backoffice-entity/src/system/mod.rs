//! Merchant system settings: brands, stores, data levels, organisations,
//! and the sign-in log.

pub mod brand;
pub mod data;
pub mod org;
pub mod signin;
pub mod store;

pub use brand::Brand;
pub use data::DataLevel;
pub use org::Organization;
pub use signin::SigninLog;
pub use store::{Address, Store};
