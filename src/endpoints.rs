//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/questions/{question_id}', use [format_endpoint].

/// The route to list and create categories.
pub const CATEGORIES: &str = "/api/categories";
/// The route to delete a single category.
pub const CATEGORY: &str = "/api/categories/{category_id}";
/// The route to list the questions in a category.
pub const CATEGORY_QUESTIONS: &str = "/api/categories/{category_id}/questions";
/// The route to list and create questions.
pub const QUESTIONS: &str = "/api/questions";
/// The route to delete a single question.
pub const QUESTION: &str = "/api/questions/{question_id}";
/// The route to search questions by their text.
pub const SEARCH_QUESTIONS: &str = "/api/questions/search";
/// The route to get the next quiz question.
pub const QUIZZES: &str = "/api/quizzes";

/// Replace the first `{...}` parameter in `endpoint_path` with `id`.
///
/// A path without a parameter is returned unchanged. An unclosed parameter
/// runs to the end of the path.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
