//! Membership plan: card design, fees, trading rules, and expiry.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// Settlement rules of stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settlement {
    pub settlement_object: String,
    pub stored_value_settlement: String,
}

/// Card fees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSetting {
    pub offline_open_card: f64,
    pub online_open_card: f64,
    /// Charge the fee again when a card is reissued.
    pub is_require_fee_second: bool,
    pub deposit: f64,
    /// Minimum top-up that opens a card.
    pub charger_and_open: f64,
}

/// Trading rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeSetting {
    pub consumption_patterns: String,
    pub is_online_charger: bool,
    pub trade_limit: String,
    pub stored_max_limit: f64,
    pub msg_push: String,
    pub verify: bool,
    pub support_business_category: Vec<String>,
    pub consumption_max_value_limit: f64,
    pub consumption_max_times_limit: i64,
    pub is_can_log_out: bool,
}

/// Expiry, in days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpireSetting {
    pub invoice: i64,
    pub member: i64,
}

/// Which profile fields are mandatory on enrolment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsSetting {
    pub is_birth_day_require: bool,
    pub is_id_card_require: bool,
}

/// A membership plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Membership {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub name: String,
    pub phone: String,
    pub card_logo: String,
    pub card_background: String,
    pub front_color: String,
    pub background_color: String,
    pub desc: String,
    /// Membership agreement text.
    pub protocol: String,
    pub settlement_info: Settlement,
    pub fee_setting_info: FeeSetting,
    pub trade_setting_info: TradeSetting,
    pub expire_setting_info: ExpireSetting,
    pub params_setting_info: ParamsSetting,
    /// Ids of the stores accepting this plan.
    pub support_store_list: Vec<String>,
}

impl_resource!(Membership, prefix = "affiliate_", model = "membership", suffix = "_config", reference = "memberships");
