//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{
    pagination::PaginationConfig,
    services::{MutationService, QueryService},
    stores::{CategoryStore, QuestionStore},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<C, Q> {
    /// Answers read requests for categories and questions.
    pub query_service: QueryService<C, Q>,
    /// Creates and deletes categories and questions.
    pub mutation_service: MutationService<C, Q>,
}

impl<C, Q> AppState<C, Q>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    /// Create a new [AppState] whose services share the given stores.
    pub fn new(category_store: C, question_store: Q, pagination_config: PaginationConfig) -> Self {
        Self {
            query_service: QueryService::new(
                category_store.clone(),
                question_store.clone(),
                pagination_config,
            ),
            mutation_service: MutationService::new(category_store, question_store),
        }
    }
}

impl<C, Q> FromRef<AppState<C, Q>> for QueryService<C, Q>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    fn from_ref(state: &AppState<C, Q>) -> Self {
        state.query_service.clone()
    }
}

impl<C, Q> FromRef<AppState<C, Q>> for MutationService<C, Q>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    fn from_ref(state: &AppState<C, Q>) -> Self {
        state.mutation_service.clone()
    }
}
