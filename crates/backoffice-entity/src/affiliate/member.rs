//! Member profile.

use serde::{Deserialize, Serialize};

use crate::resource::{DocumentMeta, impl_resource};

/// A customer enrolled in a merchant's membership programme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(flatten)]
    pub meta: DocumentMeta,
    pub customer_id: String,
    pub name: String,
    pub gender: String,
    pub phone: String,
    /// Calendar used for `birth_day` (solar or lunar).
    pub birth_type: String,
    pub birth_day: String,
    /// Enrolment channel.
    pub from: String,
    pub register_date: String,
    /// Number of coupons held.
    pub coupon: i64,
    /// Set once a migrated member has confirmed the phone by SMS.
    pub verify: bool,
}

impl_resource!(Member, prefix = "affiliate_", model = "account", suffix = "_config", reference = "members");
