use pretty_assertions::assert_eq;
use rowbatch::{session, Db, Record, Strategy};
use rowbatch_core::{
    driver::Capability,
    stmt::{Column, Type, Value},
};
use tests::{mock_db, mock_db_with};

#[derive(Debug, Record)]
struct Reading {
    #[key]
    sensor: String,
    value: f32,
    taken_on: chrono::NaiveDate,
}

fn readings(count: usize) -> Vec<Reading> {
    let day = chrono::NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

    (0..count)
        .map(|n| Reading {
            sensor: format!("s{n}"),
            value: n as f32 / 2.0,
            taken_on: day,
        })
        .collect()
}

#[tokio::test]
async fn copy_streams_each_chunk() {
    let (mut db, log) = mock_db_with(
        Db::builder().strategy(Strategy::Copy),
        &Capability::POSTGRESQL,
    )
    .await;

    db.bulk_insert(&readings(5), 2, &[]).await.unwrap();

    assert!(log.inserts().is_empty());

    let copies = log.copies();
    let sizes = copies.iter().map(|copy| copy.rows.len()).collect::<Vec<_>>();
    assert_eq!(sizes, vec![2, 2, 1]);

    assert_eq!(copies[0].table, "readings");
    assert_eq!(
        copies[0].columns,
        vec![
            Column::new("sensor", Type::String),
            Column::new("taken_on", Type::NaiveDate),
            Column::new("value", Type::F32),
        ]
    );
    assert_eq!(copies[2].rows[0][0], Value::from("s4"));
}

#[tokio::test]
async fn strategy_from_setting() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;
    db.set(session::BULK_STRATEGY, " COPY ");

    db.bulk_insert(&readings(1), 10, &[]).await.unwrap();
    assert_eq!(log.copies().len(), 1);

    db.set(session::BULK_STRATEGY, "ansi");
    db.bulk_insert(&readings(1), 10, &[]).await.unwrap();
    assert_eq!(log.inserts().len(), 1);
}

#[tokio::test]
async fn unknown_strategy() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;
    db.set(session::BULK_STRATEGY, "bcp");

    let err = db.bulk_insert(&readings(1), 10, &[]).await.unwrap_err();
    assert!(err.is_invalid_setting());
    assert_eq!(
        err.to_string(),
        "invalid setting `rowbatch:bulk_strategy`: unknown strategy `bcp`, expected `ansi` or `copy`"
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn copy_needs_database_support() {
    let (mut db, log) = mock_db(&Capability::MYSQL).await;
    db.strategy(Strategy::Copy);

    let err = db.bulk_insert(&readings(1), 10, &[]).await.unwrap_err();
    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "unsupported feature: MySQL does not support the `copy` bulk strategy"
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn copy_cannot_return_rows() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;
    db.strategy(Strategy::Copy);

    let mut out: Vec<String> = vec![];
    let err = db
        .bulk_insert_returning(&mut out, &readings(1), 10, &[])
        .await
        .unwrap_err();
    assert!(err.is_unsupported_feature());
    assert!(log.is_empty());
}

#[tokio::test]
async fn copy_ignores_the_insert_option() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;
    db.strategy(Strategy::Copy).insert_option("RETURNING sensor");

    db.bulk_insert(&readings(3), 10, &[]).await.unwrap();
    assert_eq!(log.copies().len(), 1);
}

#[tokio::test]
async fn upsert_always_uses_values() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;
    db.strategy(Strategy::Copy);

    db.bulk_upsert(&readings(3), 10, &[]).await.unwrap();

    assert!(log.copies().is_empty());
    assert_eq!(log.inserts().len(), 1);
}
