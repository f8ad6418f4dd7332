use std::sync::Arc;

use shopsync_infra::database::DbManager;
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with migrations applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Insert a country row and return its id.
    pub fn insert_country(
        &self,
        iso: &str,
        name: Option<&str>,
        remote_id: Option<i64>,
        created_at: i64,
        updated_at: i64,
    ) -> i64 {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.execute(
            "INSERT INTO countries (alpha2_code, name, remote_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![iso, name, remote_id, created_at, updated_at],
        )
        .expect("insert should succeed");
        conn.last_insert_rowid()
    }

    /// Read the stored remote id for a country row.
    pub fn stored_remote_id(&self, country_id: i64) -> Option<i64> {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_row(
            "SELECT remote_id FROM countries WHERE id = ?1",
            rusqlite::params![country_id],
            |row| row.get(0),
        )
        .expect("select should succeed")
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}
