//! Trivia questions and the rules for creating them.

mod domain;

pub use domain::{Difficulty, NewQuestion, NewQuestionRequest, Question, QuestionId};
