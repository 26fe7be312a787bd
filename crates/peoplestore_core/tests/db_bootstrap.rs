use peoplestore_core::db::migrations::{apply_migrations, latest_version};
use peoplestore_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_in_memory_applies_migrations() {
    let conn = open_db_in_memory().unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    // Migrated schema must include the document collection table.
    conn.execute(
        "INSERT INTO documents (collection, doc_id, body) VALUES ('probe', 'k', '{}');",
        [],
    )
    .unwrap();
}

#[test]
fn open_db_file_is_reopenable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.db");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO documents (collection, doc_id, body) VALUES ('probe', 'k', '{}');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM documents;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn apply_migrations_is_idempotent() {
    let mut conn = Connection::open_in_memory().unwrap();

    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_version_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { db_version, .. } if db_version == latest_version() + 1
    ));
}
