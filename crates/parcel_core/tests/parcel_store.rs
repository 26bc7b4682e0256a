use parcel_core::db::{open_db, open_db_in_memory, DbError};
use parcel_core::{Parcel, ParcelRepository, ParcelStatus, ParcelStore, RepoError};
use rand::Rng;
use rusqlite::Connection;
use std::collections::HashMap;

fn test_parcel() -> Parcel {
    Parcel::new(1000, "test")
}

#[test]
fn add_get_delete() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);
    let parcel = test_parcel();

    let number = store.add(&parcel).unwrap();
    assert!(number > 0);

    let loaded = store.get(number).unwrap();
    assert_eq!(loaded.number, number);
    assert_eq!(loaded.client, parcel.client);
    assert_eq!(loaded.status, parcel.status);
    assert_eq!(loaded.address, parcel.address);
    assert_eq!(loaded.created_at, parcel.created_at);

    store.delete(number).unwrap();
    let err = store.get(number).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(n) if n == number));
    assert!(err.is_not_found());
}

#[test]
fn add_ignores_caller_number_and_assigns_fresh_ones() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);

    let mut parcel = test_parcel();
    parcel.number = 42;
    let first = store.add(&parcel).unwrap();
    let second = store.add(&parcel).unwrap();

    assert_ne!(first, second);
    assert_eq!(store.get(first).unwrap().address, "test");
    assert_eq!(store.get(second).unwrap().address, "test");
}

#[test]
fn set_address_changes_only_address() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);
    let parcel = test_parcel();
    let number = store.add(&parcel).unwrap();

    store.set_address(number, "new test address").unwrap();

    let loaded = store.get(number).unwrap();
    assert_eq!(loaded.address, "new test address");
    assert_eq!(loaded.client, parcel.client);
    assert_eq!(loaded.status, parcel.status);
    assert_eq!(loaded.created_at, parcel.created_at);
}

#[test]
fn set_status_changes_only_status() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);
    let parcel = test_parcel();
    let number = store.add(&parcel).unwrap();

    store.set_status(number, ParcelStatus::Sent).unwrap();

    let loaded = store.get(number).unwrap();
    assert_eq!(loaded.status, ParcelStatus::Sent);
    assert_eq!(loaded.address, parcel.address);
    assert_eq!(loaded.client, parcel.client);
    assert_eq!(loaded.created_at, parcel.created_at);
}

#[test]
fn set_status_does_not_enforce_transition_order() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);
    let number = store.add(&test_parcel()).unwrap();

    store.set_status(number, ParcelStatus::Delivered).unwrap();
    store.set_status(number, ParcelStatus::Registered).unwrap();

    assert_eq!(store.get(number).unwrap().status, ParcelStatus::Registered);
}

#[test]
fn get_by_client_returns_exactly_the_clients_parcels() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);
    let client = rand::rng().random_range(0..10_000_000);

    let mut added = HashMap::new();
    for _ in 0..3 {
        let mut parcel = test_parcel();
        parcel.client = client;
        parcel.number = store.add(&parcel).unwrap();
        assert!(parcel.number > 0);
        added.insert(parcel.number, parcel);
    }
    store.add(&Parcel::new(client + 1, "someone else")).unwrap();

    let stored = store.get_by_client(client).unwrap();
    assert_eq!(stored.len(), added.len());
    for parcel in stored {
        assert_eq!(added.get(&parcel.number), Some(&parcel));
    }
}

#[test]
fn get_by_client_without_parcels_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);

    assert!(store.get_by_client(777).unwrap().is_empty());
}

#[test]
fn get_never_assigned_number_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);

    let err = store.get(9_999).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(9_999)));
}

#[test]
fn mutations_on_missing_number_succeed() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);

    store.delete(404).unwrap();
    store.delete(404).unwrap();
    store.set_address(404, "nowhere").unwrap();
    store.set_status(404, ParcelStatus::Sent).unwrap();

    assert!(store.get(404).unwrap_err().is_not_found());
}

#[test]
fn unknown_status_in_storage_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let store = ParcelStore::new(&conn);
    let number = store.add(&test_parcel()).unwrap();

    conn.execute(
        "UPDATE parcel SET status = 'lost' WHERE number = ?1;",
        [number],
    )
    .unwrap();

    let err = store.get(number).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("lost")));
}

#[test]
fn storage_failure_is_distinct_from_not_found() {
    let conn = Connection::open_in_memory().unwrap();
    let store = ParcelStore::new(&conn);

    let err = store.get(1).unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
    assert!(!err.is_not_found());

    assert!(matches!(
        store.add(&test_parcel()).unwrap_err(),
        RepoError::Db(_)
    ));
}

#[test]
fn try_new_requires_parcel_table() {
    let bare = Connection::open_in_memory().unwrap();
    let err = ParcelStore::try_new(&bare).err().unwrap();
    assert!(matches!(err, RepoError::Db(DbError::MissingTable("parcel"))));

    let ready = open_db_in_memory().unwrap();
    assert!(ParcelStore::try_new(&ready).is_ok());
}

#[test]
fn parcels_survive_reopening_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.db");
    let parcel = test_parcel();

    let number = {
        let conn = open_db(&path).unwrap();
        ParcelStore::new(&conn).add(&parcel).unwrap()
    };

    let conn = open_db(&path).unwrap();
    let mut expected = parcel;
    expected.number = number;
    assert_eq!(ParcelStore::new(&conn).get(number).unwrap(), expected);
}
