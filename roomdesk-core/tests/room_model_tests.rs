/// Integration tests for the Room model
///
/// These run against an in-memory SQLite database with the real migrations
/// applied, so the SQL in the model is exercised end to end.

use roomdesk_core::db::migrations::run_migrations;
use roomdesk_core::models::room::{CreateRoom, Room, UpdateRoom};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// In-memory database for a single test
///
/// One connection only: every connection to `sqlite::memory:` gets its own
/// database, so a larger pool would split the schema from the data.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    run_migrations(&pool).await.expect("Migrations should run");
    pool
}

fn sample_room() -> CreateRoom {
    CreateRoom {
        number: 101,
        kind: "suite".to_string(),
        price: 250.0,
        bathrooms: 2,
    }
}

#[tokio::test]
async fn test_create_room_increases_count() {
    let pool = test_pool().await;

    assert_eq!(Room::count(&pool).await.unwrap(), 0);

    let room = Room::create(&pool, sample_room()).await.unwrap();

    assert_eq!(Room::count(&pool).await.unwrap(), 1);
    assert_eq!(room.number, 101);
    assert_eq!(room.kind, "suite");
    assert_eq!(room.price, 250.0);
    assert_eq!(room.bathrooms, 2);
    assert!(room.available, "New rooms start available");
}

#[tokio::test]
async fn test_created_room_is_retrievable() {
    let pool = test_pool().await;
    let created = Room::create(&pool, sample_room()).await.unwrap();

    let found = Room::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("Room should be found");

    assert_eq!(found.id, created.id);
    assert_eq!(found.number, created.number);
    assert_eq!(found.kind, created.kind);
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let pool = test_pool().await;
    assert!(Room::find_by_id(&pool, 9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_all_preserves_insertion_order() {
    let pool = test_pool().await;

    for number in [301, 102, 205] {
        Room::create(
            &pool,
            CreateRoom {
                number,
                kind: "single".to_string(),
                price: 80.0,
                bathrooms: 1,
            },
        )
        .await
        .unwrap();
    }

    let rooms = Room::list_all(&pool).await.unwrap();
    let numbers: Vec<i64> = rooms.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![301, 102, 205]);
}

#[tokio::test]
async fn test_update_overwrites_fields_but_not_availability() {
    let pool = test_pool().await;
    let created = Room::create(&pool, sample_room()).await.unwrap();

    let updated = Room::update(
        &pool,
        created.id,
        UpdateRoom {
            number: 404,
            kind: "double".to_string(),
            price: 120.5,
            bathrooms: 1,
        },
    )
    .await
    .unwrap()
    .expect("Room should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.number, 404);
    assert_eq!(updated.kind, "double");
    assert_eq!(updated.price, 120.5);
    assert_eq!(updated.bathrooms, 1);
    assert!(updated.available);
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let pool = test_pool().await;

    let result = Room::update(
        &pool,
        9999,
        UpdateRoom {
            number: 1,
            kind: "single".to_string(),
            price: 10.0,
            bathrooms: 1,
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_removes_exactly_that_row() {
    let pool = test_pool().await;
    let first = Room::create(&pool, sample_room()).await.unwrap();
    let second = Room::create(&pool, sample_room()).await.unwrap();

    assert!(Room::delete(&pool, first.id).await.unwrap());

    assert!(Room::find_by_id(&pool, first.id).await.unwrap().is_none());
    assert!(Room::find_by_id(&pool, second.id).await.unwrap().is_some());
    assert_eq!(Room::count(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_missing_returns_false() {
    let pool = test_pool().await;
    assert!(!Room::delete(&pool, 9999).await.unwrap());
}

#[tokio::test]
async fn test_duplicate_room_numbers_are_allowed() {
    // The registry performs no validation on room numbers.
    let pool = test_pool().await;

    Room::create(&pool, sample_room()).await.unwrap();
    Room::create(&pool, sample_room()).await.unwrap();

    assert_eq!(Room::count(&pool).await.unwrap(), 2);
}
