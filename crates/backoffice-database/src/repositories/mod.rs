//! Typed repositories, one generic implementation for every collection.

pub mod collection;
pub mod manager_account;

pub use collection::{CollectionRepository, DeleteOutcome};

use backoffice_entity::affiliate::{Card, Member, Membership};
use backoffice_entity::auth::{Account, Role};
use backoffice_entity::command::Order;
use backoffice_entity::dishes::DishItem;
use backoffice_entity::manage::{ManagerAccount, ManagerRole};
use backoffice_entity::reviews::Comment;
use backoffice_entity::scm::Supplier;
use backoffice_entity::system::{Brand, DataLevel, Organization, SigninLog, Store};
use backoffice_entity::trade::{PayFlow, RefundFlow};

pub type AccountRepository = CollectionRepository<Account>;
pub type RoleRepository = CollectionRepository<Role>;
pub type MemberRepository = CollectionRepository<Member>;
pub type MembershipRepository = CollectionRepository<Membership>;
pub type CardRepository = CollectionRepository<Card>;
pub type DishItemRepository = CollectionRepository<DishItem>;
pub type SupplierRepository = CollectionRepository<Supplier>;
pub type CommentRepository = CollectionRepository<Comment>;
pub type OrderRepository = CollectionRepository<Order>;
pub type PayFlowRepository = CollectionRepository<PayFlow>;
pub type RefundFlowRepository = CollectionRepository<RefundFlow>;
pub type BrandRepository = CollectionRepository<Brand>;
pub type StoreRepository = CollectionRepository<Store>;
pub type DataLevelRepository = CollectionRepository<DataLevel>;
pub type OrganizationRepository = CollectionRepository<Organization>;
pub type SigninLogRepository = CollectionRepository<SigninLog>;
pub type ManagerAccountRepository = CollectionRepository<ManagerAccount>;
pub type ManagerRoleRepository = CollectionRepository<ManagerRole>;
