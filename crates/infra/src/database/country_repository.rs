//! Country repository implementation backed by SQLite
//!
//! Timestamps are stored as epoch seconds; the change-set query compares
//! them against the cutoff and always includes records that have never been
//! synced.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use shopsync_core::CountryRepository as CountryRepositoryPort;
use shopsync_domain::{Country, Result, ShopSyncError};
use tokio::task;

use super::manager::DbManager;

/// SQLite-backed implementation of `CountryRepository`
pub struct SqliteCountryRepository {
    db: Arc<DbManager>,
}

impl SqliteCountryRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CountryRepositoryPort for SqliteCountryRepository {
    async fn find_for_export(&self, cutoff: Option<DateTime<Utc>>) -> Result<Vec<Country>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<Vec<Country>> {
            let conn = db.get_connection()?;

            match cutoff {
                None => {
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, alpha2_code, name, remote_id, created_at, updated_at
                             FROM countries
                             ORDER BY id",
                        )
                        .map_err(map_sqlite_error)?;
                    let countries = stmt
                        .query_map([], map_country_row)
                        .map_err(map_sqlite_error)?
                        .collect::<rusqlite::Result<Vec<_>>>()
                        .map_err(map_sqlite_error)?;
                    Ok(countries)
                }
                Some(cutoff) => {
                    let cutoff = cutoff.timestamp();
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, alpha2_code, name, remote_id, created_at, updated_at
                             FROM countries
                             WHERE created_at > ?1 OR updated_at > ?1 OR remote_id IS NULL
                             ORDER BY id",
                        )
                        .map_err(map_sqlite_error)?;
                    let countries = stmt
                        .query_map(params![cutoff], map_country_row)
                        .map_err(map_sqlite_error)?
                        .collect::<rusqlite::Result<Vec<_>>>()
                        .map_err(map_sqlite_error)?;
                    Ok(countries)
                }
            }
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save_remote_id(&self, country_id: i64, remote_id: i64) -> Result<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            let changed = conn
                .execute(
                    "UPDATE countries SET remote_id = ?1 WHERE id = ?2",
                    params![remote_id, country_id],
                )
                .map_err(map_sqlite_error)?;

            if changed == 0 {
                return Err(ShopSyncError::Persistence(format!(
                    "country {country_id} does not exist"
                )));
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to a Country
fn map_country_row(row: &Row<'_>) -> rusqlite::Result<Country> {
    Ok(Country {
        id: row.get(0)?,
        alpha2_code: row.get(1)?,
        name: row.get(2)?,
        remote_id: row.get(3)?,
        created_at: epoch_to_datetime(row.get(4)?),
        updated_at: epoch_to_datetime(row.get(5)?),
    })
}

fn epoch_to_datetime(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

fn map_sqlite_error(err: rusqlite::Error) -> ShopSyncError {
    ShopSyncError::Persistence(format!("SQLite error: {err}"))
}

fn map_join_error(err: task::JoinError) -> ShopSyncError {
    ShopSyncError::Internal(format!("Task join error: {err}"))
}

// =============================================================================
// Tests
// =============================================================================
