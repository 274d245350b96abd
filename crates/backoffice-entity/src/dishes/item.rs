//! Dish item with categories, switches, and per-specification prices.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// Identification and categorisation of a dish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishBasics {
    pub dishes_id: String,
    pub name: String,
    pub pos_category: String,
    pub online_category: String,
    /// Revenue account the sales are booked to.
    pub income: String,
    /// Kitchen department preparing the dish.
    pub production_department: String,
}

/// Prices of one specification (size, portion).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecificationPrice {
    pub name: String,
    pub normal: f64,
    pub normal_vip: f64,
    pub take_out: f64,
    pub take_out_vip: f64,
}

/// Feature switches of a dish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishSwitches {
    pub is_open: bool,
    pub is_on_shelves: bool,
    pub is_support_signs: bool,
    pub is_support_new: bool,
    pub is_support_recommend: bool,
    pub is_support_discount: bool,
    pub is_support_decimal: bool,
    pub is_support_weighing: bool,
    pub is_support_auto_join: bool,
    pub is_support_sold_separately: bool,
}

/// A dish on the menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishItem {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub basic_info: DishBasics,
    pub enables: DishSwitches,
    pub income: String,
    pub production_department: String,
    #[serde(rename = "specification_list")]
    pub specifications: Vec<SpecificationPrice>,
    /// Business lines (dine-in, take-out, delivery) selling this dish.
    #[serde(rename = "support_business_list")]
    pub support_business: Vec<String>,
}

impl_resource!(DishItem, prefix = "dishes_", model = "items", suffix = "_config", reference = "items");
