//! Seeder integration tests against a real temporary SQLite file.

use std::collections::HashSet;

use chrono::Utc;
use roster::db::Db;
use roster::models::user::NewUser;
use roster::seed;
use roster::store::{SqliteUserStore, UserStore};
use tempfile::TempDir;

async fn test_store() -> (SqliteUserStore, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("test.sqlite3");
    let db = Db::connect_and_migrate(path.to_str().expect("utf-8 path"))
        .await
        .expect("database init");
    (SqliteUserStore::new(db), dir)
}

#[tokio::test]
async fn apply_inserts_exactly_n_rows() {
    let (store, _dir) = test_store().await;

    let inserted = seed::apply(&store, 7).await.expect("apply");
    assert_eq!(inserted, 7);

    let users = store.fetch_all().await.expect("fetch");
    assert_eq!(users.len(), 7);
    for u in &users {
        assert!(!u.first_name.is_empty());
        assert!(!u.last_name.is_empty());
        assert_eq!(u.email, format!("{}.{}@gmail.com", u.first_name, u.last_name));
        assert_eq!(u.created_at, u.updated_at);
    }

    // One invocation captures one instant, shared by every row
    assert!(users.iter().all(|u| u.created_at == users[0].created_at));

    let ids: HashSet<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids.len(), 7, "database assigns distinct ids");
}

#[tokio::test]
async fn apply_zero_is_a_no_op() {
    let (store, _dir) = test_store().await;

    let inserted = seed::apply(&store, 0).await.expect("apply");
    assert_eq!(inserted, 0);
    assert!(store.fetch_all().await.expect("fetch").is_empty());
}

#[tokio::test]
async fn apply_defaults_to_fifty_users() {
    let (store, _dir) = test_store().await;

    let inserted = seed::apply(&store, seed::DEFAULT_COUNT).await.expect("apply");
    assert_eq!(inserted, 50);
}

#[tokio::test]
async fn revert_empties_the_table_and_is_idempotent() {
    let (store, _dir) = test_store().await;

    seed::apply(&store, 5).await.expect("apply");
    let deleted = seed::revert(&store).await.expect("revert");
    assert_eq!(deleted, 5);
    assert!(store.fetch_all().await.expect("fetch").is_empty());

    let deleted_again = seed::revert(&store).await.expect("revert twice");
    assert_eq!(deleted_again, 0);
    assert!(store.fetch_all().await.expect("fetch").is_empty());
}

#[tokio::test]
async fn revert_also_removes_rows_it_did_not_seed() {
    let (store, _dir) = test_store().await;

    let now = Utc::now();
    let pre_existing = NewUser {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.org".to_string(),
        created_at: now,
        updated_at: now,
    };
    store.insert_many(&[pre_existing]).await.expect("insert");
    seed::apply(&store, 3).await.expect("apply");

    let deleted = seed::revert(&store).await.expect("revert");
    assert_eq!(deleted, 4);
    assert!(store.fetch_all().await.expect("fetch").is_empty());
}

#[tokio::test]
async fn colliding_emails_are_not_deduplicated() {
    let (store, _dir) = test_store().await;

    let now = Utc::now();
    let twin = NewUser {
        first_name: "Kim".to_string(),
        last_name: "Lee".to_string(),
        email: "Kim.Lee@gmail.com".to_string(),
        created_at: now,
        updated_at: now,
    };
    store
        .insert_many(&[twin.clone(), twin])
        .await
        .expect("insert");

    let users = store.fetch_all().await.expect("fetch");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, users[1].email);
}
