//! Database bootstrap utilities for redb.
//!
//! # Responsibility
//! - Open file-backed or in-memory redb databases.
//! - Emit `db_open` events with duration and status.
//!
//! # See also
//! - `db::layout` for the tables created on first write.

use super::DbResult;
use log::{error, info};
use redb::backends::InMemoryBackend;
use redb::Database;
use std::path::Path;
use std::time::Instant;

/// Opens (or creates) a redb database file.
///
/// # Side effects
/// - Creates the file when missing.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Database> {
    open_with("file", || Database::create(path.as_ref()))
}

/// Opens an empty in-memory redb database.
///
/// Contents are dropped with the returned handle.
pub fn open_db_in_memory() -> DbResult<Database> {
    open_with("memory", || {
        Database::builder().create_with_backend(InMemoryBackend::new())
    })
}

fn open_with(
    mode: &str,
    open: impl FnOnce() -> Result<Database, redb::DatabaseError>,
) -> DbResult<Database> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    match open() {
        Ok(db) => {
            info!(
                "event=db_open module=db status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(db)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}
