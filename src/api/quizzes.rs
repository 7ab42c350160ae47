//! Quiz endpoint.

use std::collections::HashSet;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::CategoryId,
    question::QuestionId,
    services::{QueryService, QuizQuestion},
    stores::{CategoryStore, QuestionStore},
};

/// The request body for the next quiz question.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    /// The questions the player has already seen.
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    /// Limit the quiz to a single category, or `None` or `0` for all questions.
    #[serde(default)]
    pub quiz_category: Option<CategoryId>,
}

/// Get a random question the player has not seen yet.
///
/// Responds with `{"question": null}` once every question has been seen.
pub async fn get_quiz_question<C, Q>(
    State(service): State<QueryService<C, Q>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizQuestion>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    let Json(request) = payload?;
    let previous_questions: HashSet<QuestionId> = request.previous_questions.into_iter().collect();

    service
        .pick_quiz_question(&previous_questions, request.quiz_category, &mut rand::rng())
        .map(Json)
}
