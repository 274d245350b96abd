//! Membership marketing: members, membership plans, and member cards.

pub mod card;
pub mod member;
pub mod membership;

pub use card::{Assets, Card, CardBasics, CardHolder};
pub use member::Member;
pub use membership::{
    ExpireSetting, FeeSetting, Membership, ParamsSetting, Settlement, TradeSetting,
};
