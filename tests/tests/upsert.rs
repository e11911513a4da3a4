use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use rowbatch::Record;
use rowbatch_core::{
    driver::Capability,
    stmt::{Upsert, Value},
};
use rowbatch_sql::Serializer;
use tests::mock_db;

#[derive(Debug, Record)]
struct Item {
    id: i64,
    name: String,
    price: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Record)]
#[table = "tags"]
struct Tag {
    label: String,
    weight: i32,
}

fn items() -> Vec<Item> {
    (1..=3)
        .map(|id| Item {
            id,
            name: format!("item{id}"),
            price: 100 * id as i32,
            created_at: DateTime::default(),
            updated_at: DateTime::default(),
        })
        .collect()
}

fn tags() -> Vec<Tag> {
    vec![Tag {
        label: "new".to_string(),
        weight: 1,
    }]
}

#[tokio::test]
async fn update_clause_skips_created_at() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;

    db.bulk_upsert(&items(), 2, &[]).await.unwrap();

    let inserts = log.inserts();
    assert_eq!(inserts.len(), 2);

    for insert in &inserts {
        assert_eq!(
            insert.upsert,
            Some(Upsert {
                target: vec!["id".to_string()],
                update: vec![
                    "id".to_string(),
                    "name".to_string(),
                    "price".to_string(),
                    "updated_at".to_string(),
                ],
            })
        );
        assert_eq!(insert.suffix, None);
    }
}

#[tokio::test]
async fn mysql_rendering() {
    let (mut db, log) = mock_db(&Capability::MYSQL).await;

    db.bulk_upsert(&items(), 10, &["created_at", "updated_at"])
        .await
        .unwrap();

    let mut params: Vec<Value> = vec![];
    let sql = Serializer::mysql().serialize_insert(&log.inserts()[0], &mut params);

    assert_eq!(
        sql,
        "INSERT INTO `items` (`id`, `name`, `price`) VALUES (?, ?, ?), (?, ?, ?), (?, ?, ?) \
         ON DUPLICATE KEY UPDATE `id` = VALUES(`id`), `name` = VALUES(`name`), `price` = VALUES(`price`)"
    );
    assert_eq!(params.len(), 9);
}

#[tokio::test]
async fn on_conflict_needs_a_primary_key() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;

    let err = db.bulk_upsert(&tags(), 10, &[]).await.unwrap_err();
    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "unsupported feature: upserting `Tag` on PostgreSQL requires a primary key to detect conflicts"
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn duplicate_key_works_without_a_primary_key() {
    let (mut db, log) = mock_db(&Capability::MYSQL).await;

    db.bulk_upsert(&tags(), 10, &[]).await.unwrap();

    let upsert = log.inserts()[0].upsert.clone().unwrap();
    assert!(upsert.target.is_empty());
    assert_eq!(upsert.update, vec!["label".to_string(), "weight".to_string()]);
}

#[tokio::test]
async fn upsert_ignores_the_insert_option() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;
    db.insert_option("RETURNING id");

    db.bulk_upsert(&items(), 10, &[]).await.unwrap();
    assert_eq!(log.inserts()[0].suffix, None);
}
