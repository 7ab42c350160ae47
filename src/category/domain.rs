//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Database identifier for a category.
pub type CategoryId = i64;

/// A validated, non-empty category label, e.g. "Science".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryType(String);

impl CategoryType {
    /// Create a category type.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidCategoryData] if `label` is empty or only
    /// whitespace.
    pub fn new(label: &str) -> Result<Self, Error> {
        let label = label.trim();

        if label.is_empty() {
            Err(Error::InvalidCategoryData)
        } else {
            Ok(Self(label.to_string()))
        }
    }

    /// Create a category type without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl AsRef<str> for CategoryType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryType::new(s)
    }
}

impl Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labelled grouping of questions.
///
/// Serializes as `{"id": 1, "type": "Science"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The category's label.
    #[serde(rename = "type")]
    pub category_type: CategoryType,
}

/// Request body for creating a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewCategoryRequest {
    /// The label for the new category.
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}
