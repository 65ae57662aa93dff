// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gymshift::CollaboratorError;
use gymshift_domain::DomainError;

/// Failures from the `SQLite` store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Diesel reported an error while running a statement.
    DatabaseError(String),
    /// The database file or URL could not be opened.
    DatabaseConnectionFailed(String),
    /// An embedded migration did not apply.
    MigrationFailed(String),
    /// A connection setting (PRAGMA) was rejected.
    QueryFailed(String),
    /// The adapter could not be constructed from its inputs.
    InitializationError(String),
    /// The connection accepts rows that reference missing centers.
    ForeignKeyEnforcementNotEnabled,
    /// A stored date, time, status or scope no longer parses.
    CorruptValue { column: &'static str, value: String },
    CenterNotFound(i64),
    ShiftNotFound(i64),
    AssignmentNotFound(i64),
    /// A lookup expected exactly one row and found none.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Storage error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => write!(f, "Cannot open database: {msg}"),
            Self::MigrationFailed(msg) => write!(f, "Schema migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Connection setting rejected: {msg}"),
            Self::InitializationError(msg) => write!(f, "Cannot set up storage: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "SQLite foreign key enforcement is off")
            }
            Self::CorruptValue { column, value } => {
                write!(f, "Stored value '{value}' in column {column} is invalid")
            }
            Self::CenterNotFound(id) => write!(f, "No center with id {id}"),
            Self::ShiftNotFound(id) => write!(f, "No shift pattern with id {id}"),
            Self::AssignmentNotFound(id) => write!(f, "No assignment with id {id}"),
            Self::NotFound(what) => write!(f, "Missing row: {what}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound(String::from("query returned no rows")),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<PersistenceError> for CollaboratorError {
    fn from(err: PersistenceError) -> Self {
        Self::new(err.to_string())
    }
}

/// Maps a domain parse failure on a stored column.
pub(crate) fn corrupt(column: &'static str, value: &str) -> impl FnOnce(DomainError) -> PersistenceError {
    let value: String = value.to_string();
    move |_| PersistenceError::CorruptValue { column, value }
}
