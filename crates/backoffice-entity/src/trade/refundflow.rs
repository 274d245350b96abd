use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// One refund transaction, linked to the trade it reverses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundFlow {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub refund_time: String,
    pub trade_channel: String,
    pub origin_trade_id: String,
    pub origin_order_id: String,
    pub financial_entity: String,
    pub origin_amount: f64,
    pub refund_amount: f64,
    pub trade_from: String,
    pub trade_category: String,
    pub trade_sub_category: String,
    pub refund_trade_status: String,
    pub remark: String,
    pub store_org_id: String,
}

impl_resource!(RefundFlow, prefix = "trade_", model = "refund", suffix = "_flow", reference = "refundflows");
