//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryType},
    db::{CreateTable, MapRow},
    stores::CategoryStore,
};

/// Creates, retrieves and deletes question categories in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
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

impl CategoryStore for SQLiteCategoryStore {
    /// Create a category in the database.
    ///
    /// # Errors
    /// This function will return an error if there is an SQL error.
    fn create(&self, category_type: CategoryType) -> Result<Category, Error> {
        let connection = self.lock()?;
        connection.execute(
            "INSERT INTO category (type) VALUES (?1);",
            (category_type.as_ref(),),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Category { id, category_type })
    }

    /// Retrieve the category with `category_id`.
    ///
    /// # Errors
    /// This function will return a [Error::NotFound] if `category_id` does not refer to a
    /// category, or an [Error::SqlError] if there is some other SQL error.
    fn get(&self, category_id: CategoryId) -> Result<Category, Error> {
        self.lock()?
            .prepare("SELECT id, type FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], SQLiteCategoryStore::map_row)
            .map_err(|error| error.into())
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        self.lock()?
            .prepare("SELECT id, type FROM category ORDER BY id ASC;")?
            .query_map([], SQLiteCategoryStore::map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    /// Delete the category with `category_id` unless questions still refer to it.
    ///
    /// # Errors
    /// This function will return a [Error::CategoryInUse] if the category has questions, or an
    /// [Error::SqlError] if there is some other SQL error.
    fn delete(&self, category_id: CategoryId) -> Result<(), Error> {
        let connection = self.lock()?;

        let question_count: i64 = connection.query_row(
            "SELECT COUNT(*) FROM question WHERE category_id = ?1;",
            [category_id],
            |row| row.get(0),
        )?;

        if question_count > 0 {
            return Err(Error::CategoryInUse(category_id));
        }

        connection.execute("DELETE FROM category WHERE id = ?1;", [category_id])?;

        Ok(())
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY,
                type TEXT NOT NULL
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;

        let raw_type: String = row.get(offset + 1)?;
        let category_type = CategoryType::new_unchecked(&raw_type);

        Ok(Self::ReturnType { id, category_type })
    }
}

#[cfg(test)]
mod category_tests {
    use crate::{
        Error,
        category::CategoryType,
        question::{Difficulty, NewQuestion},
        stores::{CategoryStore, QuestionStore},
        test_utils::get_test_stores,
    };

    #[test]
    fn create_category_succeeds() {
        let (store, _) = get_test_stores();
        let category_type = CategoryType::new("Science").unwrap();

        let category = store.create(category_type.clone()).unwrap();

        assert!(category.id > 0);
        assert_eq!(category.category_type, category_type);
    }

    #[test]
    fn get_category_succeeds() {
        let (store, _) = get_test_stores();
        let inserted_category = store.create(CategoryType::new_unchecked("Art")).unwrap();

        let selected_category = store.get(inserted_category.id);

        assert_eq!(Ok(inserted_category), selected_category);
    }

    #[test]
    fn get_category_with_invalid_id_returns_not_found() {
        let (store, _) = get_test_stores();
        let inserted_category = store.create(CategoryType::new_unchecked("Art")).unwrap();

        let selected_category = store.get(inserted_category.id + 123);

        assert_eq!(selected_category, Err(Error::NotFound));
    }

    #[test]
    fn get_all_categories_in_id_order() {
        let (store, _) = get_test_stores();
        let want = vec![
            store.create(CategoryType::new_unchecked("Sports")).unwrap(),
            store.create(CategoryType::new_unchecked("Art")).unwrap(),
            store.create(CategoryType::new_unchecked("History")).unwrap(),
        ];

        let got = store.get_all().unwrap();

        assert_eq!(want, got);
    }

    #[test]
    fn delete_category_succeeds() {
        let (store, _) = get_test_stores();
        let category = store.create(CategoryType::new_unchecked("Art")).unwrap();

        store.delete(category.id).unwrap();

        assert_eq!(store.get(category.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_missing_category_is_a_no_op() {
        let (store, _) = get_test_stores();

        assert_eq!(store.delete(999), Ok(()));
    }

    #[test]
    fn delete_category_with_questions_is_refused() {
        let (category_store, question_store) = get_test_stores();
        let category = category_store
            .create(CategoryType::new_unchecked("Science"))
            .unwrap();
        question_store
            .create(NewQuestion {
                question: "Q".to_owned(),
                answer: "A".to_owned(),
                difficulty: Difficulty::new_unchecked(1),
                category_id: category.id,
            })
            .unwrap();

        let result = category_store.delete(category.id);

        assert_eq!(result, Err(Error::CategoryInUse(category.id)));
        assert_eq!(category_store.get(category.id), Ok(category));
    }
}
