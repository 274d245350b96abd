//! Sign-in lookups for manager accounts.
//!
//! These run before a tenant is known, so they are not tenant-scoped.

use backoffice_core::result::AppResult;
use backoffice_core::types::Filter;
use backoffice_entity::manage::ManagerAccount;

use super::collection::CollectionRepository;

impl CollectionRepository<ManagerAccount> {
    /// Find the account registered with `phone`.
    pub async fn find_by_phone(&self, phone: &str) -> AppResult<Option<ManagerAccount>> {
        let mut filter = Filter::new();
        filter.push_eq("phone", phone);
        self.find_first(&filter).await
    }

    /// Find the account owning `account_id`.
    pub async fn find_by_account_id(&self, account_id: &str) -> AppResult<Option<ManagerAccount>> {
        let mut filter = Filter::new();
        filter.push_eq("account_id", account_id);
        self.find_first(&filter).await
    }
}
