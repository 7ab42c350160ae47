//! Defines the category store trait.

use crate::{
    Error,
    category::{Category, CategoryId, CategoryType},
};

/// Creates, retrieves and deletes question categories.
pub trait CategoryStore: Clone + Send + Sync + 'static {
    /// Create a new category and add it the store.
    fn create(&self, category_type: CategoryType) -> Result<Category, Error>;

    /// Get a category by its ID.
    ///
    /// Returns [Error::NotFound] if there is no category with `category_id`.
    fn get(&self, category_id: CategoryId) -> Result<Category, Error>;

    /// Get all categories ordered by ID.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Delete a category if it exists.
    ///
    /// Deleting a missing category is not an error. Implementers must refuse
    /// to delete a category that questions still refer to with
    /// [Error::CategoryInUse].
    fn delete(&self, category_id: CategoryId) -> Result<(), Error>;
}
