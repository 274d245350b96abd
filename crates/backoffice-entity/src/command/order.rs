//! Order with customer and amount breakdown.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// Who placed the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Amount breakdown of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amounts {
    /// Amount receivable.
    pub amount: f64,
    pub paid: f64,
    /// List-price total.
    pub total: f64,
    /// Member discount.
    pub vip: f64,
    pub deduction: f64,
    pub refund: f64,
}

/// A sales order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub serial_number: u64,
    pub city: String,
    pub store_name: String,
    pub order_id: String,
    pub bill_id: String,
    /// Id assigned by the external ordering platform.
    pub external_id: String,
    pub flow_id: String,
    pub customer_info: Customer,
    pub amount_info: Amounts,
    pub order_time: String,
    pub order_status: String,
    pub order_category: String,
    pub channel: String,
    pub pay_channel: String,
    pub external_pay_method: String,
    pub remark: String,
}

impl_resource!(Order, prefix = "command_", model = "order", suffix = "_config", reference = "orders");
