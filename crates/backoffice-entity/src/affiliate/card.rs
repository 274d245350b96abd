//! Member card with holder, classification, and balances.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// Card balances and lifetime counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    pub balance: f64,
    pub cash_charge: f64,
    pub freezing: f64,
    pub gift: f64,
    /// Loyalty points.
    pub integral: u64,
    pub total_balance: f64,
    pub total_balance_counter: u64,
    pub total_cumulative_consumption: f64,
    pub total_cumulative_consumption_counter: u64,
    /// Credit line granted to the card.
    pub debit_total_limit: f64,
    pub debit_left_limit: f64,
    pub debit_used_limit: f64,
}

/// The card holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardHolder {
    pub customer_id: String,
    pub name: String,
    pub gender: String,
    pub phone: String,
    pub birth_day: String,
}

/// Card classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardBasics {
    #[serde(rename = "type")]
    pub kind: String,
    pub card_status: String,
    pub level: String,
    /// Store that issued the card.
    pub card_from: String,
}

/// A member card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub user_info: CardHolder,
    pub card_info: CardBasics,
    #[serde(rename = "assets")]
    pub assets_info: Assets,
    pub from: String,
    /// Card number.
    pub number: String,
    pub opening_date: String,
    /// Set once a migrated card has been bound to an account by SMS.
    pub verify: bool,
}

impl_resource!(Card, prefix = "affiliate_", model = "card", suffix = "_config", reference = "cards");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_fields_use_wire_names() {
        let mut card = Card::default();
        card.card_info.kind = "stored-value".to_string();
        card.assets_info.balance = 603.9;
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["card_info"]["type"], "stored-value");
        assert_eq!(value["assets"]["balance"], 603.9);
    }
}
