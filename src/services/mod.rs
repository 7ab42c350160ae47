//! The query and mutation services that sit between the HTTP handlers and the stores.

mod mutation;
mod query;

pub use mutation::MutationService;
pub use query::{CategoryList, CategoryQuestions, QueryService, QuestionPage, QuizQuestion, SearchResults};
