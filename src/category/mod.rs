//! Categories group trivia questions by topic.

mod domain;

pub use domain::{Category, CategoryId, CategoryType, NewCategoryRequest};
