//! HTTP handlers that translate requests into service calls and results into JSON.

mod categories;
mod questions;
mod quizzes;

use serde::{Deserialize, Serialize};

pub use categories::{create_category, delete_category, get_categories, get_category_questions};
pub use questions::{create_question, delete_question, get_questions, search_questions};
pub use quizzes::get_quiz_question;

/// A confirmation message for requests that do not return a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// What happened.
    pub message: String,
}

impl Message {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
