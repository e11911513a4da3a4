#![cfg(feature = "sqlite")]

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rowbatch::{Db, Record, Strategy};
use tests::SetupSqlite;

const SCHEMA: &str = "
CREATE TABLE users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT,
    role TEXT NOT NULL,
    age_years INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

#[derive(Debug, Clone, Default, PartialEq, Record)]
struct User {
    id: i64,
    name: String,
    email: Option<String>,
    #[column(default = "member")]
    role: String,
    #[column("age_years")]
    age: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

fn user(n: usize) -> User {
    User {
        name: format!("user{n}"),
        email: Some(format!("user{n}@example.com")),
        age: 20 + n as i32,
        ..Default::default()
    }
}

fn users(count: usize) -> Vec<User> {
    (0..count).map(user).collect()
}

async fn setup() -> (SetupSqlite, Db) {
    let setup = SetupSqlite::new(SCHEMA);
    let db = Db::builder()
        .now(fixed_now)
        .build(setup.driver())
        .await
        .unwrap();
    (setup, db)
}

#[tokio::test]
async fn insert_in_chunks() {
    let (setup, mut db) = setup().await;

    db.bulk_insert(&users(25), 10, &[]).await.unwrap();
    assert_eq!(setup.count("users"), 25);

    let (name, role, age, created_at): (String, String, i32, String) = setup
        .connection()
        .query_row(
            "SELECT name, role, age_years, created_at FROM users WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .unwrap();

    assert_eq!(name, "user0");
    assert_eq!(role, "member");
    assert_eq!(age, 20);
    assert_eq!(created_at, "2024-01-02T03:04:05+00:00");
}

#[tokio::test]
async fn excluded_fields_are_not_written() {
    let (setup, mut db) = setup().await;

    db.bulk_insert(&users(3), 10, &["email"]).await.unwrap();

    let nulls: i64 = setup
        .connection()
        .query_row("SELECT COUNT(*) FROM users WHERE email IS NULL", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(nulls, 3);
}

#[tokio::test]
async fn returning_primary_keys() {
    let (_setup, mut db) = setup().await;

    let mut ids: Vec<i64> = vec![];
    db.bulk_insert_returning(&mut ids, &users(5), 2, &[])
        .await
        .unwrap();

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    // Later calls keep appending
    db.bulk_insert_returning(&mut ids, &users(1), 2, &[])
        .await
        .unwrap();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn returning_records() {
    let (_setup, mut db) = setup().await;

    let mut out: Vec<User> = vec![];
    db.bulk_insert_returning(&mut out, &users(3), 10, &[])
        .await
        .unwrap();

    assert_eq!(out.len(), 3);
    assert_eq!(
        out[2],
        User {
            id: 3,
            name: "user2".to_string(),
            email: Some("user2@example.com".to_string()),
            role: "member".to_string(),
            age: 22,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    );
}

#[tokio::test]
async fn returning_uses_the_insert_option() {
    let (_setup, mut db) = setup().await;
    db.insert_option("RETURNING id");

    let mut out: Vec<User> = vec![];
    db.bulk_insert_returning(&mut out, &users(2), 10, &[])
        .await
        .unwrap();

    // Only `id` came back, the rest is left at its default
    assert_eq!(out[1].id, 2);
    assert_eq!(out[1].name, "");
}

#[tokio::test]
async fn insert_option_is_appended() {
    let (setup, mut db) = setup().await;

    let mut first = user(1);
    first.id = 7;
    db.bulk_insert(&[first], 10, &[]).await.unwrap();

    let mut again = user(2);
    again.id = 7;
    let mut other = user(3);
    other.id = 8;

    db.insert_option("ON CONFLICT DO NOTHING");
    db.bulk_insert(&[again, other], 10, &[]).await.unwrap();

    assert_eq!(setup.count("users"), 2);

    let name: String = setup
        .connection()
        .query_row("SELECT name FROM users WHERE id = 7", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "user1");
}

#[tokio::test]
async fn returning_insert_option_on_plain_insert() {
    let (setup, mut db) = setup().await;

    db.insert_option("RETURNING id");
    db.bulk_insert(&[user(1), user(2), user(3)], 2, &[])
        .await
        .unwrap();

    assert_eq!(setup.count("users"), 3);

    let names: Vec<String> = setup
        .connection()
        .prepare("SELECT name FROM users ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, ["user1", "user2", "user3"]);
}

#[tokio::test]
async fn upsert_keeps_created_at() {
    let (setup, mut db) = setup().await;
    let inserted_at = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();

    let existing = (1..=2)
        .map(|id| User {
            id,
            created_at: inserted_at,
            ..user(id as usize)
        })
        .collect::<Vec<_>>();
    db.bulk_insert(&existing, 10, &[]).await.unwrap();

    let changed = vec![
        User {
            id: 1,
            name: "renamed".to_string(),
            created_at: fixed_now(),
            ..user(1)
        },
        User {
            id: 3,
            created_at: fixed_now(),
            ..user(3)
        },
    ];
    db.bulk_upsert(&changed, 10, &[]).await.unwrap();

    assert_eq!(setup.count("users"), 3);

    let (name, created_at): (String, String) = setup
        .connection()
        .query_row(
            "SELECT name, created_at FROM users WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();

    assert_eq!(name, "renamed");
    assert_eq!(created_at, inserted_at.to_rfc3339());
}

#[tokio::test]
async fn rollback_discards_chunks() {
    let (setup, mut db) = setup().await;

    db.begin().await.unwrap();
    db.bulk_insert(&users(10), 3, &[]).await.unwrap();
    db.rollback().await.unwrap();
    assert_eq!(setup.count("users"), 0);

    db.begin().await.unwrap();
    db.bulk_insert(&users(10), 3, &[]).await.unwrap();
    db.commit().await.unwrap();
    assert_eq!(setup.count("users"), 10);
}

#[tokio::test]
async fn inconsistent_chunk_is_rejected() {
    let (setup, mut db) = setup().await;

    let mut records = users(2);
    records[0].id = 10;

    let err = db.bulk_insert(&records, 2, &[]).await.unwrap_err();
    assert!(err.is_inconsistent_attributes());
    assert_eq!(
        err.to_string(),
        "attribute sizes are inconsistent: record 1 has 6 attributes, expected 7"
    );
    assert_eq!(setup.count("users"), 0);

    // Split into separate chunks the same records are fine
    db.bulk_insert(&records, 1, &[]).await.unwrap();
    assert_eq!(setup.count("users"), 2);
}

#[tokio::test]
async fn copy_is_not_supported() {
    let (setup, mut db) = setup().await;
    db.strategy(Strategy::Copy);

    let err = db.bulk_insert(&users(2), 10, &[]).await.unwrap_err();
    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "unsupported feature: SQLite does not support the `copy` bulk strategy"
    );
    assert_eq!(setup.count("users"), 0);
}

#[tokio::test]
async fn connect_from_url() {
    let setup = SetupSqlite::new(SCHEMA);
    let mut db = Db::connect(&setup.url()).await.unwrap();

    assert_eq!(db.capability().name, "SQLite");

    db.bulk_insert(&users(4), 3, &[]).await.unwrap();
    assert_eq!(setup.count("users"), 4);
}

#[tokio::test]
async fn driver_errors_are_reported() {
    // A fresh in-memory database has no `users` table
    let mut db = Db::connect("sqlite::memory:").await.unwrap();

    let err = db.bulk_insert(&users(1), 10, &[]).await.unwrap_err();
    assert!(err.is_driver());
    assert!(err.to_string().contains("no such table"), "{err}");
}
