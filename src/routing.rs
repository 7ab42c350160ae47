//! Application router configuration.

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState, Error,
    api::{
        create_category, create_question, delete_category, delete_question, get_categories,
        get_category_questions, get_questions, get_quiz_question, search_questions,
    },
    endpoints,
    stores::{CategoryStore, QuestionStore},
};

/// The request headers that clients may send cross-origin.
const ALLOWED_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];

/// The methods that clients may use cross-origin.
const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// Return a router with all the app's routes.
pub fn build_router<C, Q>(state: AppState<C, Q>) -> Router
where
    C: CategoryStore,
    Q: QuestionStore,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS);

    Router::new()
        .route(
            endpoints::CATEGORIES,
            get(get_categories::<C, Q>).post(create_category::<C, Q>),
        )
        .route(endpoints::CATEGORY, delete(delete_category::<C, Q>))
        .route(
            endpoints::CATEGORY_QUESTIONS,
            get(get_category_questions::<C, Q>),
        )
        .route(
            endpoints::QUESTIONS,
            get(get_questions::<C, Q>).post(create_question::<C, Q>),
        )
        .route(endpoints::SEARCH_QUESTIONS, post(search_questions::<C, Q>))
        .route(endpoints::QUESTION, delete(delete_question::<C, Q>))
        .route(endpoints::QUIZZES, post(get_quiz_question::<C, Q>))
        .fallback(get_404_not_found)
        .layer(cors)
        .with_state(state)
}

/// Respond to unknown routes with a JSON 404.
async fn get_404_not_found() -> Error {
    Error::NotFound
}
