// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup for the collection store.
//!
//! Collections reference each other by plain id strings, so no foreign key
//! pragma is configured. Opening a store establishes the connection, applies
//! any pending collection migrations and, for files, switches the journal to
//! WAL.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Embedded collection migrations.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Result row of `PRAGMA journal_mode`.
#[derive(QueryableByName)]
struct JournalModeRow {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

/// Opens a connection at `database_url` and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the connection cannot be established or a migration
/// fails.
pub fn open_collections(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(url = database_url, "Opening collection store");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();
    info!(applied, "Collection migrations applied");

    Ok(conn)
}

/// Reports the connection's current journal mode, lowercased.
///
/// # Errors
///
/// Returns an error if the pragma cannot be read.
pub fn journal_mode(conn: &mut SqliteConnection) -> Result<String, PersistenceError> {
    let row: JournalModeRow = diesel::sql_query("PRAGMA journal_mode").get_result(conn)?;
    Ok(row.journal_mode.to_lowercase())
}

/// Switches a file-backed connection to write-ahead logging.
///
/// # Errors
///
/// Returns an error if the pragma fails or `SQLite` keeps another mode.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let row: JournalModeRow = diesel::sql_query("PRAGMA journal_mode = WAL").get_result(conn)?;
    let mode: String = row.journal_mode.to_lowercase();
    if mode != "wal" {
        return Err(PersistenceError::InitializationError(format!(
            "journal mode is '{mode}', expected 'wal'"
        )));
    }
    debug!("WAL journal mode enabled");
    Ok(())
}
