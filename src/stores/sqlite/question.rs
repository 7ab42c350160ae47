//! Implements a SQLite backed question store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row, ffi};

use crate::{
    Error,
    category::CategoryId,
    db::{CreateTable, MapRow},
    question::{Difficulty, NewQuestion, Question, QuestionId},
    stores::{QuestionStore, sqlite::SQLiteCategoryStore},
};

/// Columns for a question joined with its category, in [MapRow] order.
const SELECT_QUESTION_WITH_CATEGORY: &str = "SELECT q.id, q.question, q.answer, q.category_id, q.difficulty, c.id, c.type
    FROM question q
    INNER JOIN category c ON c.id = q.category_id";

/// Stores questions in a SQLite database.
///
/// Note that because a question depends on the [Category](crate::category::Category) model,
/// the category table must be set up in the database.
#[derive(Debug, Clone)]
pub struct SQLiteQuestionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteQuestionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl QuestionStore for SQLiteQuestionStore {
    /// Insert a question and read it back joined with its category.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::CategoryNotFound] if `category_id` does not refer to a valid category,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let connection = self.lock()?;

        connection
            .execute(
                "INSERT INTO question (question, answer, difficulty, category_id)
                VALUES (?1, ?2, ?3, ?4);",
                (
                    &new_question.question,
                    &new_question.answer,
                    new_question.difficulty.as_i64(),
                    new_question.category_id,
                ),
            )
            .map_err(|error| match error {
                rusqlite::Error::SqliteFailure(sql_error, _)
                    if sql_error.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
                {
                    Error::CategoryNotFound(new_question.category_id)
                }
                error => error.into(),
            })?;

        let id = connection.last_insert_rowid();

        select_question(id, &connection)
    }

    fn get(&self, question_id: QuestionId) -> Result<Question, Error> {
        let connection = self.lock()?;

        select_question(question_id, &connection)
    }

    fn get_all(&self) -> Result<Vec<Question>, Error> {
        self.lock()?
            .prepare(&format!("{SELECT_QUESTION_WITH_CATEGORY} ORDER BY q.id ASC;"))?
            .query_map([], SQLiteQuestionStore::map_row)?
            .map(|maybe_question| maybe_question.map_err(|error| error.into()))
            .collect()
    }

    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, Error> {
        self.lock()?
            .prepare(&format!(
                "{SELECT_QUESTION_WITH_CATEGORY} WHERE q.category_id = :category_id ORDER BY q.id ASC;"
            ))?
            .query_map(&[(":category_id", &category_id)], SQLiteQuestionStore::map_row)?
            .map(|maybe_question| maybe_question.map_err(|error| error.into()))
            .collect()
    }

    fn delete(&self, question_id: QuestionId) -> Result<bool, Error> {
        let rows_affected = self
            .lock()?
            .execute("DELETE FROM question WHERE id = ?1;", [question_id])?;

        Ok(rows_affected > 0)
    }
}

fn select_question(question_id: QuestionId, connection: &Connection) -> Result<Question, Error> {
    connection
        .prepare(&format!("{SELECT_QUESTION_WITH_CATEGORY} WHERE q.id = :id;"))?
        .query_row(&[(":id", &question_id)], SQLiteQuestionStore::map_row)
        .map_err(|error| error.into())
}

impl CreateTable for SQLiteQuestionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS question (
                id INTEGER PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                difficulty INTEGER NOT NULL CHECK (difficulty > 0),
                category_id INTEGER NOT NULL,
                FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE RESTRICT
            );

            CREATE INDEX IF NOT EXISTS idx_question_category ON question(category_id);",
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteQuestionStore {
    type ReturnType = Question;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Self::ReturnType {
            id: row.get(offset)?,
            question: row.get(offset + 1)?,
            answer: row.get(offset + 2)?,
            category_id: row.get(offset + 3)?,
            difficulty: Difficulty::new_unchecked(row.get(offset + 4)?),
            category: SQLiteCategoryStore::map_row_with_offset(row, offset + 5)?,
        })
    }
}
