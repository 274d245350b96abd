use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// One payment transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayFlow {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub trade_time: String,
    pub trade_channel: String,
    pub trade_from: String,
    /// Bank or payment provider that settled the trade.
    pub financial_entity: String,
    pub information: String,
    pub trade_category: String,
    pub trade_sub_category: String,
    pub amount: String,
    pub trade_status: String,
    pub order_id: String,
    pub remark: String,
    pub store_org_id: String,
}

impl_resource!(PayFlow, prefix = "trade_", model = "pay", suffix = "_flow", reference = "payflows");
