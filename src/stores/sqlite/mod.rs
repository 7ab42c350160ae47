//! Contains the SQLite implementations of the stores and a convenience
//! function for creating an [AppState] that uses them.

mod category;
mod question;

pub use category::SQLiteCategoryStore;
pub use question::SQLiteQuestionStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, Error, db::initialize, pagination::PaginationConfig};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteCategoryStore, SQLiteQuestionStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(
    db_connection: Connection,
    pagination_config: PaginationConfig,
) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(
        SQLiteCategoryStore::new(connection.clone()),
        SQLiteQuestionStore::new(connection),
        pagination_config,
    ))
}
