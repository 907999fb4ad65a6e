use fraudprep_core::{
    pipeline, preprocess, BadPair, MemorySink, RawTables, ReportEvent,
};
use polars::df;
use polars::prelude::*;

const BAD_TX: &str = "7dd260b9-5836-4d26-9163-ceff19cee458";

/// Three transactions: t1 fully linked, t2 missing its customer row, and
/// the third carrying a `(transaction_id, customer_id)` pair from the
/// known-bad list.
fn scenario_tables() -> RawTables {
    let transactions = df!(
        "transaction_id" => ["t1", "t2", BAD_TX],
        "customer_id" => ["c1", "c2", "99209"],
        "device_id" => ["d1", "d1", "d2"],
        "amount" => [12.5, 40.0, 7.0],
    )
    .unwrap();
    let locations = df!(
        "transaction_id" => ["t1", "t2", BAD_TX],
        "country" => ["ES", "FR", "ES"],
    )
    .unwrap();
    let flags = df!(
        "transaction_id" => ["t1", "t2", BAD_TX],
        "is_fraud" => [false, false, false],
    )
    .unwrap();
    let time_records = df!(
        "transaction_id" => ["t1", "t2", BAD_TX],
        "hour" => [9i64, 14, 23],
    )
    .unwrap();
    let devices = df!(
        "device_id" => ["d1", "d2"],
        "browser" => [None::<&str>, Some("Firefox")],
    )
    .unwrap();
    let customers = df!(
        "customer_id" => ["c1"],
        "name" => ["Ana"],
        "country" => ["ES"],
        "zip_code" => ["08001"],
        "email" => [None::<&str>],
        "phone" => [Some("600111222")],
    )
    .unwrap();

    RawTables {
        transactions,
        locations,
        customers,
        flags,
        time_records,
        devices,
    }
}

#[test]
fn end_to_end_keeps_only_the_fully_linked_transaction() {
    let sink = MemorySink::new();
    let cleaned = preprocess(scenario_tables(), &sink).unwrap();

    // The bad pair removes the third transaction; t2 survives the left
    // join with a null name and is dropped by the missing-value stage.
    assert_eq!(cleaned.height(), 1);
    let ids = cleaned.column("transaction_id").unwrap();
    let ids = ids.str().unwrap();
    assert_eq!(ids.get(0), Some("t1"));

    let events = sink.events();
    assert!(events.contains(&ReportEvent::BadPairRemoved {
        transaction_id: BAD_TX.to_string(),
        customer_id: "99209".to_string(),
        removed: 1,
    }));
    assert!(events.contains(&ReportEvent::DroppedMissingName {
        before: 2,
        after: 1,
    }));
}

#[test]
fn end_to_end_normalizes_countries_and_identifiers() {
    let cleaned = pipeline(scenario_tables(), false).unwrap();

    let columns: Vec<&str> = cleaned
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert!(columns.contains(&"merchant_country"));
    assert!(columns.contains(&"customer_country"));
    assert!(!columns.contains(&"country"));
    assert!(!columns.contains(&"country_right"));

    assert_eq!(
        cleaned.column("customer_id").unwrap().dtype(),
        &DataType::String
    );
    let zips = cleaned.column("zip_code").unwrap();
    assert_eq!(zips.dtype(), &DataType::String);
    let zips = zips.str().unwrap();
    assert_eq!(zips.get(0), Some("08001"));
}

#[test]
fn end_to_end_fills_sparse_columns_with_sentinel() {
    let cleaned = pipeline(scenario_tables(), false).unwrap();

    for column in ["zip_code", "browser", "email", "phone"] {
        let series = cleaned.column(column).unwrap();
        assert_eq!(series.null_count(), 0, "{column} still has nulls");
    }

    // t1 used device d1, whose browser was unknown; c1 had no email.
    let browsers = cleaned.column("browser").unwrap();
    let browsers = browsers.str().unwrap();
    assert_eq!(browsers.get(0), Some("Unknown"));
    let emails = cleaned.column("email").unwrap();
    let emails = emails.str().unwrap();
    assert_eq!(emails.get(0), Some("Unknown"));
}

#[test]
fn duplicate_input_rows_do_not_reach_the_output() {
    let mut tables = scenario_tables();
    tables.transactions = tables
        .transactions
        .vstack(&tables.transactions.clone())
        .unwrap();
    tables.locations = tables.locations.vstack(&tables.locations.clone()).unwrap();

    let cleaned = pipeline(tables, false).unwrap();
    assert_eq!(cleaned.height(), 1);
}

#[test]
fn verbose_and_silent_runs_produce_identical_frames() {
    let silent = pipeline(scenario_tables(), false).unwrap();
    let verbose = pipeline(scenario_tables(), true).unwrap();
    assert!(silent.equals_missing(&verbose));
}

#[test]
fn diagnostics_flow_only_through_the_injected_sink() {
    let sink = MemorySink::new();
    let cleaned = preprocess(scenario_tables(), &sink).unwrap();

    // Six dedup notices, one bad-pair removal, the name drop, and four
    // sentinel fills; the silent run returns the identical frame.
    let events = sink.events();
    assert_eq!(events.len(), 12);

    let silent = pipeline(scenario_tables(), false).unwrap();
    assert!(cleaned.equals_missing(&silent));
}

#[test]
fn custom_bad_pair_lists_are_plain_data() {
    let raw = r#"[
        {"transaction_id": "t1", "customer_id": "c1"},
        {"transaction_id": "t2", "customer_id": "c2"}
    ]"#;
    let pairs: Vec<BadPair> = serde_json::from_str(raw).unwrap();

    let tables = scenario_tables();
    let sink = MemorySink::new();
    let filtered =
        fraudprep_core::remove_bad_pairs(&tables.transactions, &pairs, &sink).unwrap();

    assert_eq!(filtered.height(), 1);
    assert_eq!(sink.events().len(), 2);
}
