//! Sales orders.

pub mod order;

pub use order::{Amounts, Customer, Order};
