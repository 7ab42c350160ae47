//! Defines the question store trait.

use crate::{
    Error,
    category::CategoryId,
    question::{NewQuestion, Question, QuestionId},
};

/// Handles the creation, retrieval and deletion of questions.
///
/// Questions are always returned joined with their category and ordered by ID.
pub trait QuestionStore: Clone + Send + Sync + 'static {
    /// Save a new question and return it with its generated ID.
    ///
    /// Returns [Error::CategoryNotFound] if the question's category does not exist.
    fn create(&self, new_question: NewQuestion) -> Result<Question, Error>;

    /// Get a question by its ID.
    ///
    /// Returns [Error::NotFound] if there is no question with `question_id`.
    fn get(&self, question_id: QuestionId) -> Result<Question, Error>;

    /// Get every question.
    fn get_all(&self) -> Result<Vec<Question>, Error>;

    /// Get the questions that belong to the category `category_id`.
    fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, Error>;

    /// Delete a question if it exists.
    ///
    /// Returns `true` if a question was deleted and `false` if there was no
    /// question with `question_id`.
    fn delete(&self, question_id: QuestionId) -> Result<bool, Error>;
}
