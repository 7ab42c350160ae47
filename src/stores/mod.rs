//! Contains traits and implementations for objects that store the domain models.

mod category;
mod question;

pub mod sqlite;

pub use category::CategoryStore;
pub use question::QuestionStore;
