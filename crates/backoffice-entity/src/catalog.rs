//! Enumeration of every known resource, for callers that pick a
//! collection at runtime.

use std::fmt;
use std::str::FromStr;

use backoffice_core::AppError;

use crate::affiliate::{Card, Member, Membership};
use crate::auth::{Account, Role};
use crate::command::Order;
use crate::dishes::DishItem;
use crate::manage::{ManagerAccount, ManagerRole};
use crate::resource::{Resource, ResourceDescriptor};
use crate::reviews::Comment;
use crate::scm::Supplier;
use crate::system::{Brand, DataLevel, Organization, SigninLog, Store};
use crate::trade::{PayFlow, RefundFlow};

/// Every back-office resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Account,
    Role,
    Member,
    Membership,
    Card,
    DishItem,
    Supplier,
    Comment,
    Order,
    PayFlow,
    RefundFlow,
    Brand,
    Store,
    DataLevel,
    Organization,
    SigninLog,
    ManagerAccount,
    ManagerRole,
}

impl ResourceKind {
    /// All kinds, in display order.
    pub const ALL: [ResourceKind; 18] = [
        Self::Account,
        Self::Role,
        Self::Member,
        Self::Membership,
        Self::Card,
        Self::DishItem,
        Self::Supplier,
        Self::Comment,
        Self::Order,
        Self::PayFlow,
        Self::RefundFlow,
        Self::Brand,
        Self::Store,
        Self::DataLevel,
        Self::Organization,
        Self::SigninLog,
        Self::ManagerAccount,
        Self::ManagerRole,
    ];

    /// The kebab-case name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Role => "role",
            Self::Member => "member",
            Self::Membership => "membership",
            Self::Card => "card",
            Self::DishItem => "dish-item",
            Self::Supplier => "supplier",
            Self::Comment => "comment",
            Self::Order => "order",
            Self::PayFlow => "pay-flow",
            Self::RefundFlow => "refund-flow",
            Self::Brand => "brand",
            Self::Store => "store",
            Self::DataLevel => "data-level",
            Self::Organization => "organization",
            Self::SigninLog => "signin-log",
            Self::ManagerAccount => "manager-account",
            Self::ManagerRole => "manager-role",
        }
    }

    /// The collection description of this kind.
    pub fn descriptor(&self) -> ResourceDescriptor {
        match self {
            Self::Account => Account::DESCRIPTOR,
            Self::Role => Role::DESCRIPTOR,
            Self::Member => Member::DESCRIPTOR,
            Self::Membership => Membership::DESCRIPTOR,
            Self::Card => Card::DESCRIPTOR,
            Self::DishItem => DishItem::DESCRIPTOR,
            Self::Supplier => Supplier::DESCRIPTOR,
            Self::Comment => Comment::DESCRIPTOR,
            Self::Order => Order::DESCRIPTOR,
            Self::PayFlow => PayFlow::DESCRIPTOR,
            Self::RefundFlow => RefundFlow::DESCRIPTOR,
            Self::Brand => Brand::DESCRIPTOR,
            Self::Store => Store::DESCRIPTOR,
            Self::DataLevel => DataLevel::DESCRIPTOR,
            Self::Organization => Organization::DESCRIPTOR,
            Self::SigninLog => SigninLog::DESCRIPTOR,
            Self::ManagerAccount => ManagerAccount::DESCRIPTOR,
            Self::ManagerRole => ManagerRole::DESCRIPTOR,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Unknown resource '{s}'. Run `backoffice resources` for the list"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_collections_are_unique() {
        let collections: HashSet<&str> = ResourceKind::ALL
            .iter()
            .map(|kind| kind.descriptor().collection)
            .collect();
        assert_eq!(collections.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_name_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        }
        assert!("widgets".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_known_collection_names() {
        assert_eq!(ResourceKind::PayFlow.descriptor().collection, "trade_pay_flow");
        assert_eq!(ResourceKind::ManagerAccount.descriptor().collection, "sys_manage_account");
        assert_eq!(ResourceKind::SigninLog.descriptor().collection, "sys_signin_log");
    }
}
