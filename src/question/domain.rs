//! Core question domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{Category, CategoryId},
};

/// Database identifier for a question.
pub type QuestionId = i64;

/// How hard a question is. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct Difficulty(i64);

impl Difficulty {
    /// Create a difficulty rating.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidQuestionData] if `rating` is zero or negative.
    pub fn new(rating: i64) -> Result<Self, Error> {
        if rating > 0 {
            Ok(Self(rating))
        } else {
            Err(Error::InvalidQuestionData)
        }
    }

    /// Create a difficulty without validation.
    ///
    /// The caller should ensure that `rating` is positive.
    pub fn new_unchecked(rating: i64) -> Self {
        Self(rating)
    }

    /// The rating as a plain integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quiz prompt and answer pair, joined with its category for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Question {
    /// The ID of the question.
    pub id: QuestionId,
    /// The prompt shown to the player.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// The ID of the category the question belongs to.
    pub category_id: CategoryId,
    /// The category the question belongs to.
    pub category: Category,
    /// How hard the question is.
    pub difficulty: Difficulty,
}

/// The raw request body for creating a question.
///
/// Every field is optional so that missing fields are reported as invalid
/// question data rather than as a parsing failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewQuestionRequest {
    /// The prompt.
    pub question: Option<String>,
    /// The expected answer.
    pub answer: Option<String>,
    /// The difficulty rating. Zero counts as missing.
    pub difficulty: Option<i64>,
    /// The category ID. Zero counts as missing.
    pub category: Option<CategoryId>,
}

/// A validated question that is ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// The prompt, trimmed and non-empty.
    pub question: String,
    /// The answer, trimmed and non-empty.
    pub answer: String,
    /// How hard the question is.
    pub difficulty: Difficulty,
    /// The category to file the question under.
    pub category_id: CategoryId,
}

impl TryFrom<NewQuestionRequest> for NewQuestion {
    type Error = Error;

    /// Validate a question request.
    ///
    /// Empty text, a difficulty below one, and a missing or zero category are
    /// all rejected. Whether the category exists is checked by the caller.
    fn try_from(request: NewQuestionRequest) -> Result<Self, Self::Error> {
        let question = non_empty(request.question)?;
        let answer = non_empty(request.answer)?;
        let difficulty = request
            .difficulty
            .ok_or(Error::InvalidQuestionData)
            .and_then(Difficulty::new)?;
        let category_id = match request.category {
            Some(id) if id != 0 => id,
            _ => return Err(Error::InvalidQuestionData),
        };

        Ok(Self {
            question,
            answer,
            difficulty,
            category_id,
        })
    }
}

fn non_empty(text: Option<String>) -> Result<String, Error> {
    match text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_owned()),
        _ => Err(Error::InvalidQuestionData),
    }
}
