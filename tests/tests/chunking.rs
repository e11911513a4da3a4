use pretty_assertions::assert_eq;
use rowbatch::{session, Record};
use rowbatch_core::{
    driver::Capability,
    stmt::{Column, Type, Value},
};
use tests::mock_db;

#[derive(Debug, Record)]
struct Event {
    id: i64,
    kind: String,
    payload: Option<Vec<u8>>,
    score: f64,
}

#[derive(Debug, Record)]
struct Marker {
    #[key]
    #[auto]
    seq: i64,
}

fn events(count: usize) -> Vec<Event> {
    (0..count)
        .map(|n| Event {
            id: 0,
            kind: format!("kind-{}", n % 3),
            payload: None,
            score: n as f64,
        })
        .collect()
}

#[tokio::test]
async fn one_statement_per_chunk() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;

    db.bulk_insert(&events(100), 30, &[]).await.unwrap();

    let inserts = log.inserts();
    let sizes = inserts.iter().map(|insert| insert.rows.len()).collect::<Vec<_>>();
    assert_eq!(sizes, vec![30, 30, 30, 10]);
    assert_eq!(log.response_lens(), vec![30, 30, 30, 10]);

    for insert in &inserts {
        assert_eq!(insert.table, "events");
        assert_eq!(insert.upsert, None);
        assert_eq!(insert.suffix, None);
    }
}

#[tokio::test]
async fn columns_are_sorted_by_name() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;

    db.bulk_insert(&events(2), 10, &[]).await.unwrap();

    let [insert] = &log.inserts()[..] else {
        panic!("expected a single insert");
    };

    assert_eq!(
        insert.columns,
        vec![
            Column::new("kind", Type::String),
            Column::new("payload", Type::Bytes),
            Column::new("score", Type::F64),
        ]
    );
    assert_eq!(
        insert.rows[1].fields,
        vec![Value::from("kind-1"), Value::Null, Value::F64(1.0)]
    );
}

#[tokio::test]
async fn exactly_one_chunk() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;

    db.bulk_insert(&events(30), 30, &[]).await.unwrap();
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn no_records_no_statements() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;

    db.bulk_insert::<Event>(&[], 10, &[]).await.unwrap();
    assert!(log.is_empty());
}

#[tokio::test]
async fn zero_chunk_size() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;

    let err = db.bulk_insert(&events(3), 0, &[]).await.unwrap_err();
    assert_eq!(err.to_string(), "chunk size must be greater than zero");
    assert!(log.is_empty());
}

#[tokio::test]
async fn later_chunk_fails_after_earlier_chunks_are_written() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;

    let mut records = events(4);
    records[0].id = 1;
    records[1].id = 2;
    records[2].id = 3;

    let err = db.bulk_insert(&records, 2, &[]).await.unwrap_err();
    assert!(err.is_inconsistent_attributes());
    assert_eq!(
        err.to_string(),
        "attribute sizes are inconsistent: record 1 has 3 attributes, expected 4"
    );
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn excluding_every_column() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;

    let err = db
        .bulk_insert(&events(1), 10, &["kind", "payload", "score"])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "record `Event` has no attributes to insert");
    assert!(log.is_empty());
}

#[tokio::test]
async fn auto_increment_only_record() {
    let (mut db, _log) = mock_db(&Capability::SQLITE).await;

    let err = db
        .bulk_insert(&[Marker { seq: 0 }], 10, &[])
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "record `Marker` has no attributes to insert");
}

#[tokio::test]
async fn insert_option_must_be_a_string() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;
    db.set(session::INSERT_OPTION, 5_i64);

    let err = db.bulk_insert(&events(1), 10, &[]).await.unwrap_err();
    assert!(err.is_invalid_setting());
    assert_eq!(
        err.to_string(),
        "invalid setting `rowbatch:insert_option`: expected a string, got I64"
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn insert_option_is_passed_through() {
    let (mut db, log) = mock_db(&Capability::SQLITE).await;
    db.insert_option("ON CONFLICT DO NOTHING");

    db.bulk_insert(&events(3), 2, &[]).await.unwrap();

    for insert in log.inserts() {
        assert_eq!(insert.suffix.as_deref(), Some("ON CONFLICT DO NOTHING"));
    }

    db.unset(session::INSERT_OPTION);
    log.clear();

    db.bulk_insert(&events(1), 2, &[]).await.unwrap();
    assert_eq!(log.inserts()[0].suffix, None);
}
