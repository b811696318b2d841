//! Repository tests against a real on-disk SQLite database.

use std::sync::Arc;

use agriport_core::crops::{CropPatch, CropRepositoryTrait, NewCrop};
use agriport_core::negotiations::{
    NegotiationParty, NegotiationPatch, NegotiationRepositoryTrait, NewNegotiation,
};
use agriport_core::users::{NewUser, UserPatch, UserRepositoryTrait};
use agriport_core::{Error, StoreError};
use agriport_storage_sqlite::crops::CropRepository;
use agriport_storage_sqlite::db;
use agriport_storage_sqlite::negotiations::NegotiationRepository;
use agriport_storage_sqlite::users::UserRepository;
use tempfile::TempDir;

fn test_db() -> (Arc<db::DbPool>, db::WriteHandle, TempDir) {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("test.db");
    let pool = db::create_pool(db_path.to_str().unwrap()).unwrap();
    db::run_migrations(&pool).unwrap();
    let writer = db::spawn_writer((*pool).clone());
    (pool, writer, tmp)
}

fn new_user(name: &str, phone: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        phone: phone.to_string(),
        password: "pw".to_string(),
        is_admin: false,
    }
}

#[tokio::test]
async fn insert_assigns_sequential_ids() {
    let (pool, writer, _tmp) = test_db();
    let repo = UserRepository::new(pool, writer);

    let first = repo.insert_user(new_user("Asha", "999")).await.unwrap();
    let second = repo.insert_user(new_user("Ravi", "888")).await.unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);

    let all = repo.load_users().unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn find_by_phone_returns_none_for_unknown_number() {
    let (pool, writer, _tmp) = test_db();
    let repo = UserRepository::new(pool, writer);
    repo.insert_user(new_user("Asha", "999")).await.unwrap();

    assert!(repo.find_by_phone("999").unwrap().is_some());
    assert!(repo.find_by_phone("000").unwrap().is_none());
}

#[tokio::test]
async fn patch_updates_only_named_columns() {
    let (pool, writer, _tmp) = test_db();
    let repo = UserRepository::new(pool, writer);
    let user = repo.insert_user(new_user("Asha", "999")).await.unwrap();

    let patch = UserPatch {
        password: Some("new-pw".to_string()),
        ..Default::default()
    };
    let updated = repo.update_user(user.id, patch).await.unwrap();

    assert_eq!(updated.password, "new-pw");
    assert_eq!(updated.name, "Asha");
    assert_eq!(updated.phone, "999");
    assert!(!updated.is_admin);
}

#[tokio::test]
async fn delete_of_missing_id_reports_not_found() {
    let (pool, writer, _tmp) = test_db();
    let repo = UserRepository::new(pool, writer);

    let err = repo.delete_user(42).await.unwrap_err();
    assert!(matches!(err, Error::Store(StoreError::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_the_row() {
    let (pool, writer, _tmp) = test_db();
    let repo = UserRepository::new(pool, writer);
    let user = repo.insert_user(new_user("Asha", "999")).await.unwrap();

    repo.delete_user(user.id).await.unwrap();
    assert!(repo.load_users().unwrap().is_empty());
}

#[tokio::test]
async fn crops_are_scoped_to_their_owner() {
    let (pool, writer, _tmp) = test_db();
    let repo = CropRepository::new(pool, writer);

    repo.insert_crop(NewCrop {
        user_id: 1,
        crop_name: "Wheat".to_string(),
        area: Some(2.5),
        sow_date: Some("2025-06-01".to_string()),
        fertilizer: None,
        expected_yield: Some(800.0),
    })
    .await
    .unwrap();
    repo.insert_crop(NewCrop {
        user_id: 2,
        crop_name: "Rice".to_string(),
        area: None,
        sow_date: None,
        fertilizer: None,
        expected_yield: None,
    })
    .await
    .unwrap();

    let for_one = repo.load_crops_by_user(1).unwrap();
    assert_eq!(for_one.len(), 1);
    assert_eq!(for_one[0].crop_name, "Wheat");

    // A user with no crops gets an empty list, not an error.
    assert!(repo.load_crops_by_user(3).unwrap().is_empty());
}

#[tokio::test]
async fn crop_patch_keeps_unset_columns() {
    let (pool, writer, _tmp) = test_db();
    let repo = CropRepository::new(pool, writer);
    let crop = repo
        .insert_crop(NewCrop {
            user_id: 1,
            crop_name: "Wheat".to_string(),
            area: Some(2.5),
            sow_date: Some("2025-06-01".to_string()),
            fertilizer: Some("urea".to_string()),
            expected_yield: Some(800.0),
        })
        .await
        .unwrap();

    let patch = CropPatch {
        fertilizer: Some("compost".to_string()),
        ..Default::default()
    };
    let updated = repo.update_crop(crop.id, patch).await.unwrap();
    assert_eq!(updated.fertilizer.as_deref(), Some("compost"));
    assert_eq!(updated.area, Some(2.5));
    assert_eq!(updated.sow_date.as_deref(), Some("2025-06-01"));
    assert_eq!(updated.expected_yield, Some(800.0));
}

#[tokio::test]
async fn negotiation_insert_sets_pending_and_filters_by_party() {
    let (pool, writer, _tmp) = test_db();
    let repo = NegotiationRepository::new(pool, writer);

    let created = repo
        .insert_negotiation(NewNegotiation {
            farmer_id: 1,
            buyer_id: 2,
            crop_name: "Wheat".to_string(),
            quantity_kg: 100.0,
            proposed_price: 20.0,
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(created.status, "pending");

    let farmer_side = repo
        .load_negotiations_for_user(1, NegotiationParty::Farmer)
        .unwrap();
    assert_eq!(farmer_side.len(), 1);

    let buyer_side = repo
        .load_negotiations_for_user(1, NegotiationParty::Buyer)
        .unwrap();
    assert!(buyer_side.is_empty());

    let patch = NegotiationPatch {
        status: Some("accepted".to_string()),
        ..Default::default()
    };
    let updated = repo.update_negotiation(created.id, patch).await.unwrap();
    assert_eq!(updated.status, "accepted");
    assert_eq!(updated.quantity_kg, 100.0);
}
