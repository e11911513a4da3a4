use pretty_assertions::assert_eq;
use rowbatch::Record;
use rowbatch_core::driver::Capability;
use tests::mock_db;

#[derive(Debug, Default, PartialEq, Record)]
struct Order {
    id: i64,
    customer: String,
    total: u32,
}

fn orders(count: usize) -> Vec<Order> {
    (0..count)
        .map(|n| Order {
            id: 0,
            customer: format!("c{n}"),
            total: n as u32,
        })
        .collect()
}

#[tokio::test]
async fn ids_accumulate_across_chunks() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;

    let mut ids: Vec<i64> = vec![];
    db.bulk_insert_returning(&mut ids, &orders(7), 3, &[])
        .await
        .unwrap();

    assert_eq!(ids, (1..=7).collect::<Vec<_>>());
    assert_eq!(log.returning_flags(), vec![true, true, true]);

    for insert in log.inserts() {
        assert_eq!(insert.suffix.as_deref(), Some("RETURNING *"));
    }
}

#[tokio::test]
async fn custom_returning_clause() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;
    db.insert_option("RETURNING id");

    let mut ids: Vec<u64> = vec![];
    db.bulk_insert_returning(&mut ids, &orders(2), 10, &[])
        .await
        .unwrap();

    assert_eq!(ids, vec![1, 2]);
    assert_eq!(log.inserts()[0].suffix.as_deref(), Some("RETURNING id"));
}

#[tokio::test]
async fn records_load_returned_columns() {
    let (mut db, _log) = mock_db(&Capability::SQLITE).await;

    let mut out: Vec<Order> = vec![];
    db.bulk_insert_returning(&mut out, &orders(2), 10, &[])
        .await
        .unwrap();

    assert_eq!(
        out,
        vec![
            Order {
                id: 1,
                ..Default::default()
            },
            Order {
                id: 2,
                ..Default::default()
            },
        ]
    );
}

#[tokio::test]
async fn mismatched_target_type() {
    let (mut db, _log) = mock_db(&Capability::POSTGRESQL).await;

    let mut out: Vec<String> = vec![];
    let err = db
        .bulk_insert_returning(&mut out, &orders(1), 10, &[])
        .await
        .unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert I64 to String");
}

#[tokio::test]
async fn plain_inserts_do_not_return() {
    let (mut db, log) = mock_db(&Capability::POSTGRESQL).await;

    db.bulk_insert(&orders(2), 10, &[]).await.unwrap();
    assert_eq!(log.returning_flags(), vec![false]);
}
