//! Menu items.

pub mod item;

pub use item::{DishBasics, DishItem, DishSwitches, SpecificationPrice};
