// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening and configuring `SQLite` connections.
//!
//! Everything here is raw PRAGMA work that Diesel has no DSL for. Row IDs
//! for new records come back through `RETURNING` in the mutation modules.

use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Embedded schema migrations, applied on every open.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Milliseconds a file-backed connection waits on a locked database.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Where a connection's data lives.
#[derive(Debug, Clone, Copy)]
pub enum Storage<'a> {
    /// A shared-cache in-memory database URL.
    Memory(&'a str),
    /// A path to a database file, created if missing.
    File(&'a str),
}

impl<'a> Storage<'a> {
    const fn url(self) -> &'a str {
        match self {
            Self::Memory(url) | Self::File(url) => url,
        }
    }

    fn pragmas(self) -> Vec<String> {
        let mut pragmas: Vec<String> = vec!["PRAGMA foreign_keys = ON".to_string()];
        if matches!(self, Self::File(_)) {
            pragmas.push("PRAGMA journal_mode = WAL".to_string());
            pragmas.push(format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"));
        }
        pragmas
    }
}

#[derive(QueryableByName)]
struct ForeignKeysRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Opens a connection, configures it and brings the schema up to date.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, a PRAGMA fails,
/// foreign keys stay disabled, or a migration fails.
pub fn open(storage: Storage<'_>) -> Result<SqliteConnection, PersistenceError> {
    let mut conn: SqliteConnection = SqliteConnection::establish(storage.url())?;

    for pragma in storage.pragmas() {
        debug!(pragma = %pragma, "Applying connection setting");
        diesel::sql_query(&pragma)
            .execute(&mut conn)
            .map_err(|e| PersistenceError::QueryFailed(format!("{pragma}: {e}")))?;
    }
    require_foreign_keys(&mut conn)?;

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();

    info!(url = storage.url(), migrations_applied = applied, "Opened scheduler database");
    Ok(conn)
}

/// Fails unless the connection enforces foreign keys.
///
/// Employees, shift patterns, holidays and assignments all point at a
/// center; an unenforced connection would accept orphans.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyEnforcementNotEnabled` when the
/// PRAGMA reports 0, or a query error if it cannot be read.
pub fn require_foreign_keys(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let row: ForeignKeysRow = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;
    if row.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }
    Ok(())
}
