use rusqlite::Connection;
use studentdb_core::db::migrations::latest_version;
use studentdb_core::db::{open_db, open_db_in_memory, DbError};
use studentdb_core::{NewStudent, SqliteStudentRepository, StudentRepository};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "students");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "students");
}

#[test]
fn committed_rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");

    let conn = open_db(&path).unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    let id = repo
        .create_student(&NewStudent::new("Durable", 20, "A"))
        .unwrap();
    drop(repo);
    drop(conn);

    let conn = open_db(&path).unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    let loaded = repo.get_student(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Durable");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_enforces_required_fields() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO students (name, age, grade) VALUES (NULL, 20, 'A');",
        [],
    );
    assert!(result.is_err(), "NULL name must violate the schema");
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
