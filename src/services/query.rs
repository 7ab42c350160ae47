//! Read operations over categories and questions.

use std::collections::{BTreeMap, HashSet};

use rand::{Rng, seq::IteratorRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::{Category, CategoryId},
    pagination::{PaginationConfig, page_count, paginate},
    question::{Question, QuestionId},
    stores::{CategoryStore, QuestionStore},
};

/// Every category as a map from ID to type label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryList {
    /// Category type labels keyed by category ID.
    pub categories: BTreeMap<CategoryId, String>,
    /// The number of categories.
    pub total_categories: usize,
}

/// One page of questions along with the total question count and the categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPage {
    /// The questions on the requested page.
    pub questions: Vec<Question>,
    /// The number of questions across all pages.
    pub total_questions: usize,
    /// Category type labels keyed by category ID.
    pub categories: BTreeMap<CategoryId, String>,
    /// Always `None` since the page spans every category.
    pub current_category: Option<CategoryId>,
}

/// The first page of questions matching a search term.
///
/// `total_questions` counts every match, not just those on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// The first page of matching questions.
    pub questions: Vec<Question>,
    /// The number of matching questions.
    pub total_questions: usize,
    /// Always `None` since search spans every category.
    pub current_category: Option<CategoryId>,
}

/// All of the questions in a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryQuestions {
    /// Every question in the category.
    pub questions: Vec<Question>,
    /// The number of questions in the category.
    pub total_questions: usize,
    /// The ID of the requested category.
    pub current_category: CategoryId,
}

/// The next quiz question, or `None` when every candidate has been seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// The chosen question, if any were left.
    pub question: Option<Question>,
}

/// Answers the read-only requests of the API.
#[derive(Debug, Clone)]
pub struct QueryService<C, Q> {
    categories: C,
    questions: Q,
    pagination_config: PaginationConfig,
}

impl<C, Q> QueryService<C, Q>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    /// Create a query service that reads from the given stores.
    pub fn new(categories: C, questions: Q, pagination_config: PaginationConfig) -> Self {
        Self {
            categories,
            questions,
            pagination_config,
        }
    }

    /// List every category.
    pub fn list_categories(&self) -> Result<CategoryList, Error> {
        let categories = self.category_map()?;

        Ok(CategoryList {
            total_categories: categories.len(),
            categories,
        })
    }

    /// Get one page of questions. `page` defaults to the configured default page.
    ///
    /// # Errors
    /// Returns [Error::InvalidPage] if `page` is zero, or if there are questions and `page` is
    /// past the last page.
    pub fn list_questions(&self, page: Option<u64>) -> Result<QuestionPage, Error> {
        let page = page.unwrap_or(self.pagination_config.default_page);
        let page_size = self.pagination_config.page_size;

        if page == 0 {
            return Err(Error::InvalidPage(page));
        }

        let questions = self.questions.get_all()?;
        let total_questions = questions.len();
        let max_page = page_count(total_questions as u64, page_size);

        if total_questions > 0 && page > max_page {
            return Err(Error::InvalidPage(page));
        }

        Ok(QuestionPage {
            questions: paginate(questions, page, page_size),
            total_questions,
            categories: self.category_map()?,
            current_category: None,
        })
    }

    /// Find the questions whose text contains `search_term`, ignoring case.
    ///
    /// Only the first page of matches is returned.
    pub fn search_questions(&self, search_term: &str) -> Result<SearchResults, Error> {
        let search_term = search_term.to_lowercase();

        let matches: Vec<Question> = self
            .questions
            .get_all()?
            .into_iter()
            .filter(|question| question.question.to_lowercase().contains(&search_term))
            .collect();
        let total_questions = matches.len();

        Ok(SearchResults {
            questions: paginate(matches, 1, self.pagination_config.page_size),
            total_questions,
            current_category: None,
        })
    }

    /// Get every question in the category `category_id`.
    ///
    /// # Errors
    /// Returns [Error::CategoryNotFound] if there is no such category.
    pub fn list_questions_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<CategoryQuestions, Error> {
        self.categories
            .get(category_id)
            .map_err(|error| match error {
                Error::NotFound => Error::CategoryNotFound(category_id),
                error => error,
            })?;

        let questions = self.questions.get_by_category(category_id)?;

        Ok(CategoryQuestions {
            total_questions: questions.len(),
            questions,
            current_category: category_id,
        })
    }

    /// Pick a random question that is not in `previous_questions`.
    ///
    /// Candidates are restricted to `quiz_category` when given. A category of
    /// `0` means all questions, the same as `None`. Each remaining candidate
    /// is equally likely to be chosen.
    pub fn pick_quiz_question<R>(
        &self,
        previous_questions: &HashSet<QuestionId>,
        quiz_category: Option<CategoryId>,
        rng: &mut R,
    ) -> Result<QuizQuestion, Error>
    where
        R: Rng + ?Sized,
    {
        let candidates = match quiz_category {
            Some(category_id) if category_id != 0 => {
                self.questions.get_by_category(category_id)?
            }
            _ => self.questions.get_all()?,
        };

        let question = candidates
            .into_iter()
            .filter(|question| !previous_questions.contains(&question.id))
            .choose(rng);

        Ok(QuizQuestion { question })
    }

    fn category_map(&self) -> Result<BTreeMap<CategoryId, String>, Error> {
        Ok(self
            .categories
            .get_all()?
            .into_iter()
            .map(|Category { id, category_type }| (id, category_type.to_string()))
            .collect())
    }
}
