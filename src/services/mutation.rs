//! Create and delete operations for questions and categories.

use crate::{
    Error,
    category::{Category, CategoryId, CategoryType, NewCategoryRequest},
    question::{NewQuestion, NewQuestionRequest, Question, QuestionId},
    stores::{CategoryStore, QuestionStore},
};

/// Validates changes and applies them to the stores.
#[derive(Debug, Clone)]
pub struct MutationService<C, Q> {
    categories: C,
    questions: Q,
}

impl<C, Q> MutationService<C, Q>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    /// Create a mutation service that writes to the given stores.
    pub fn new(categories: C, questions: Q) -> Self {
        Self {
            categories,
            questions,
        }
    }

    /// Validate and save a new question.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidQuestionData] if a field is missing, empty or not positive,
    /// - [Error::CategoryNotFound] if the category does not exist,
    /// - or [Error::CreateQuestionFailed] if the store could not save the question.
    pub fn create_question(&self, request: NewQuestionRequest) -> Result<Question, Error> {
        let new_question = NewQuestion::try_from(request)?;
        let category_id = new_question.category_id;

        self.categories
            .get(category_id)
            .map_err(|error| match error {
                Error::NotFound => Error::CategoryNotFound(category_id),
                error => error,
            })?;

        match self.questions.create(new_question) {
            Ok(question) => {
                tracing::debug!("Created question {}", question.id);
                Ok(question)
            }
            Err(Error::CategoryNotFound(id)) => Err(Error::CategoryNotFound(id)),
            Err(error) => {
                tracing::error!("An unexpected error occurred while creating a question: {error}");
                Err(Error::CreateQuestionFailed(error.to_string()))
            }
        }
    }

    /// Delete the question `question_id` if it exists.
    ///
    /// Deleting a question that does not exist succeeds.
    ///
    /// # Errors
    /// Returns [Error::DeleteQuestionFailed] if the store fails.
    pub fn delete_question(&self, question_id: QuestionId) -> Result<(), Error> {
        match self.questions.delete(question_id) {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::debug!("Question {question_id} was already absent, nothing to delete");
                Ok(())
            }
            Err(error) => {
                tracing::error!(
                    "An unexpected error occurred while deleting question {question_id}: {error}"
                );
                Err(Error::DeleteQuestionFailed(question_id))
            }
        }
    }

    /// Validate and save a new category.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidCategoryData] if the type label is missing or empty,
    /// - or [Error::CreateCategoryFailed] if the store could not save the category.
    pub fn create_category(&self, request: NewCategoryRequest) -> Result<Category, Error> {
        let category_type = request
            .category_type
            .as_deref()
            .ok_or(Error::InvalidCategoryData)
            .and_then(CategoryType::new)?;

        self.categories.create(category_type).map_err(|error| {
            tracing::error!("An unexpected error occurred while creating a category: {error}");
            Error::CreateCategoryFailed(error.to_string())
        })
    }

    /// Delete the category `category_id` if it exists and has no questions.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::CategoryInUse] if questions still refer to the category,
    /// - or [Error::DeleteCategoryFailed] if the store fails.
    pub fn delete_category(&self, category_id: CategoryId) -> Result<(), Error> {
        match self.categories.delete(category_id) {
            Ok(()) => Ok(()),
            Err(Error::CategoryInUse(id)) => Err(Error::CategoryInUse(id)),
            Err(error) => {
                tracing::error!(
                    "An unexpected error occurred while deleting category {category_id}: {error}"
                );
                Err(Error::DeleteCategoryFailed(category_id))
            }
        }
    }
}
