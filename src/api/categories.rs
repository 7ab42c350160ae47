//! Category endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    api::Message,
    category::{Category, CategoryId, NewCategoryRequest},
    services::{CategoryList, CategoryQuestions, MutationService, QueryService},
    stores::{CategoryStore, QuestionStore},
};

/// List every category as a map from ID to type.
pub async fn get_categories<C, Q>(
    State(service): State<QueryService<C, Q>>,
) -> Result<Json<CategoryList>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    service.list_categories().map(Json)
}

/// List every question in a category.
///
/// Responds with 400 if the category does not exist.
pub async fn get_category_questions<C, Q>(
    State(service): State<QueryService<C, Q>>,
    path: Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<CategoryQuestions>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    let Path(category_id) = path?;

    service.list_questions_by_category(category_id).map(Json)
}

/// Create a category from a `{"type": ...}` body.
pub async fn create_category<C, Q>(
    State(service): State<MutationService<C, Q>>,
    payload: Result<Json<NewCategoryRequest>, JsonRejection>,
) -> Result<Json<Category>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    let Json(request) = payload?;

    service.create_category(request).map(Json)
}

/// Delete a category that has no questions.
///
/// Deleting a category that does not exist succeeds.
pub async fn delete_category<C, Q>(
    State(service): State<MutationService<C, Q>>,
    path: Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<Message>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    let Path(category_id) = path?;

    service.delete_category(category_id)?;

    Ok(Json(Message::new("Category deleted successfully")))
}
