//! Integration tests for typed CRUD operations.

mod helpers;

use serde_json::json;

use backoffice_core::error::ErrorKind;
use backoffice_core::traits::DocumentStore;
use backoffice_core::types::{Document, Filter};
use backoffice_database::DeleteOutcome;
use backoffice_entity::Resource;
use backoffice_entity::auth::{Permissions, Role};
use backoffice_entity::manage::ManagerAccount;

use helpers::{TestApp, role};

fn fields(value: serde_json::Value) -> Document {
    value.as_object().cloned().expect("object")
}

#[tokio::test]
async fn test_create_assigns_id_tenant_and_timestamps() {
    let app = TestApp::new();
    let repo = app.repo::<Role>();

    let mut input = role("cashier");
    input.meta.merchant_id = "someone-else".to_string();
    let id = repo.create("m1", input).await.unwrap();

    let stored = repo.detail("m1", &id.to_string()).await.unwrap();
    assert_eq!(stored.meta.id, Some(id));
    assert_eq!(stored.meta.merchant_id, "m1");
    assert_eq!(stored.meta.created_at, "2024-05-01 08:30:00");
    assert_eq!(stored.meta.updated_at, "2024-05-01 08:30:00");
    assert_eq!(stored.name, "cashier");
}

#[tokio::test]
async fn test_detail_is_tenant_scoped() {
    let app = TestApp::new();
    let id = app.create_role("m1", "cashier").await;

    let err = app.repo::<Role>().detail("m2", &id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_malformed_id_is_invalid_identifier() {
    let app = TestApp::new();
    let repo = app.repo::<Role>();

    for err in [
        repo.detail("m1", "abc").await.unwrap_err(),
        repo.update("m1", "abc", &role("x")).await.unwrap_err(),
        repo.delete("m1", "abc").await.unwrap_err(),
    ] {
        assert_eq!(err.kind, ErrorKind::InvalidIdentifier);
    }
}

#[tokio::test]
async fn test_update_merges_non_empty_fields() {
    let app = TestApp::new();
    let repo = app.repo::<Role>();
    let mut input = role("cashier");
    input.desc = "front desk".to_string();
    input.apps = vec!["pos".to_string()];
    let id = repo.create("m1", input).await.unwrap().to_string();

    repo.update_fields(
        "m1",
        &id,
        fields(json!({
            "name": "head cashier",
            "desc": "",
            "apps": [],
            "merchant_id": "m2",
            "created_at": "1999-01-01 00:00:00"
        })),
    )
    .await
    .unwrap();

    let stored = repo.detail("m1", &id).await.unwrap();
    assert_eq!(stored.name, "head cashier");
    assert_eq!(stored.desc, "front desk");
    assert_eq!(stored.apps, vec!["pos".to_string()]);
    assert_eq!(stored.meta.merchant_id, "m1");
    assert_eq!(stored.meta.created_at, "2024-05-01 08:30:00");
}

#[tokio::test]
async fn test_update_keeps_false_and_zero() {
    let app = TestApp::new();
    let repo = app.repo::<Role>();
    let mut input = role("cashier");
    input.meta.status = true;
    input.meta.access_level = 3;
    let id = repo.create("m1", input).await.unwrap().to_string();

    repo.update_fields("m1", &id, fields(json!({"status": false, "access_level": 0})))
        .await
        .unwrap();

    let stored = repo.detail("m1", &id).await.unwrap();
    assert!(!stored.meta.status);
    assert_eq!(stored.meta.access_level, 0);
}

#[tokio::test]
async fn test_typed_update_leaves_unset_fields() {
    let app = TestApp::new();
    let repo = app.repo::<Role>();
    let mut input = role("cashier");
    input.meta.status = true;
    input.meta.access_level = 3;
    input.permissions = Permissions {
        read: true,
        app_id: "pos".to_string(),
        ..Permissions::default()
    };
    let id = repo.create("m1", input).await.unwrap().to_string();

    repo.update("m1", &id, &role("chef")).await.unwrap();

    let stored = repo.detail("m1", &id).await.unwrap();
    assert_eq!(stored.name, "chef");
    assert!(stored.meta.status);
    assert_eq!(stored.meta.access_level, 3);
    assert!(stored.permissions.read);
    assert_eq!(stored.permissions.app_id, "pos");
    assert_eq!(stored.meta.updated_at, "2024-05-01 08:30:00");
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let app = TestApp::new();
    let repo = app.repo::<Role>();
    let id = app.create_role("m1", "cashier").await;

    let patch = Role {
        name: "chef".to_string(),
        permissions: Permissions {
            read: true,
            ..Permissions::default()
        },
        ..Role::default()
    };

    repo.update("m1", &id, &patch).await.unwrap();
    let once = app
        .store
        .find_first(Role::DESCRIPTOR.collection, &Filter::new())
        .await
        .unwrap();
    repo.update("m1", &id, &patch).await.unwrap();
    let twice = app
        .store
        .find_first(Role::DESCRIPTOR.collection, &Filter::new())
        .await
        .unwrap();

    assert!(once.is_some());
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_update_without_match_is_not_matched() {
    let app = TestApp::new();
    let id = app.create_role("m1", "cashier").await;
    let repo = app.repo::<Role>();

    let err = repo.update("m2", &id, &role("chef")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotMatched);

    let missing = backoffice_core::types::DocumentId::new().to_string();
    let err = repo.update("m1", &missing, &role("chef")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotMatched);
}

#[tokio::test]
async fn test_delete_outcomes() {
    let app = TestApp::new();
    let repo = app.repo::<Role>();
    let id = app.create_role("m1", "cashier").await;

    assert_eq!(
        repo.delete("m2", &id).await.unwrap(),
        DeleteOutcome::NothingDeleted
    );
    assert_eq!(repo.delete("m1", &id).await.unwrap(), DeleteOutcome::Deleted);
    assert_eq!(
        repo.delete("m1", &id).await.unwrap(),
        DeleteOutcome::NothingDeleted
    );
    assert_eq!(app.store.len(Role::DESCRIPTOR.collection).await, 0);
}

#[tokio::test]
async fn test_manager_account_lookups() {
    let app = TestApp::new();
    let repo = app.repo::<ManagerAccount>();
    let mut account = ManagerAccount {
        phone: "13800000000".to_string(),
        name: "owner".to_string(),
        ..ManagerAccount::default()
    };
    account.meta.account_id = "acc-1".to_string();
    repo.create("m1", account).await.unwrap();

    let by_phone = repo.find_by_phone("13800000000").await.unwrap();
    assert_eq!(by_phone.map(|a| a.name), Some("owner".to_string()));

    let by_account = repo.find_by_account_id("acc-1").await.unwrap();
    assert!(by_account.is_some());

    assert!(repo.find_by_phone("000").await.unwrap().is_none());
}
