//! Question endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    api::Message,
    question::{NewQuestionRequest, Question, QuestionId},
    services::{MutationService, QueryService, QuestionPage, SearchResults},
    stores::{CategoryStore, QuestionStore},
};

/// The query string for listing questions, e.g. `?page=2`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageQuery {
    /// The 1-based page number.
    pub page: Option<u64>,
}

/// The request body for searching questions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The text to look for in each question.
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Get a page of questions along with all categories.
pub async fn get_questions<C, Q>(
    State(service): State<QueryService<C, Q>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionPage>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    let Query(PageQuery { page }) = query?;

    service.list_questions(page).map(Json)
}

/// Create a question and return it joined with its category.
pub async fn create_question<C, Q>(
    State(service): State<MutationService<C, Q>>,
    payload: Result<Json<NewQuestionRequest>, JsonRejection>,
) -> Result<Json<Question>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    let Json(request) = payload?;

    service.create_question(request).map(Json)
}

/// Delete a question.
///
/// Responds with success even when there was no question with the given ID.
pub async fn delete_question<C, Q>(
    State(service): State<MutationService<C, Q>>,
    path: Result<Path<QuestionId>, PathRejection>,
) -> Result<Json<Message>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    let Path(question_id) = path?;

    service.delete_question(question_id)?;

    Ok(Json(Message::new("Question deleted successfully")))
}

/// Search question text for a case-insensitive substring.
pub async fn search_questions<C, Q>(
    State(service): State<QueryService<C, Q>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResults>, Error>
where
    C: CategoryStore,
    Q: QuestionStore,
{
    let Json(request) = payload?;
    let search_term = request.search_term.ok_or(Error::MissingSearchTerm)?;

    service.search_questions(&search_term).map(Json)
}

#[cfg(test)]
mod question_endpoint_tests {
    use serde_json::json;

    use crate::{
        api::Message,
        endpoints::{self, format_endpoint},
        error::ErrorBody,
        question::{Difficulty, Question},
        services::{QuestionPage, SearchResults},
        test_utils::{create_category, create_question, get_test_server},
    };

    #[tokio::test]
    async fn get_questions_with_no_records() {
        let server = get_test_server();

        let response = server.get(endpoints::QUESTIONS).await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["questions"], json!([]));
        assert_eq!(body["total_questions"], 0);
        assert_eq!(body["current_category"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn get_questions_with_one_record() {
        let server = get_test_server();
        let category = create_category(&server, "Science").await;
        let question = create_question(&server, "Q1", category.id).await;

        let response = server.get(endpoints::QUESTIONS).await;

        response.assert_status_ok();
        let body = response.json::<QuestionPage>();
        assert_eq!(body.total_questions, 1);
        assert_eq!(body.questions, vec![question]);
        assert_eq!(body.categories.get(&category.id), Some(&"Science".to_owned()));
    }

    #[tokio::test]
    async fn get_questions_handles_multiple_pages() {
        let server = get_test_server();
        let category = create_category(&server, "Science").await;
        for i in 0..15 {
            create_question(&server, &format!("Q{i}"), category.id).await;
        }

        let response = server.get(&format!("{}?page=2", endpoints::QUESTIONS)).await;

        response.assert_status_ok();
        let body = response.json::<QuestionPage>();
        assert_eq!(body.total_questions, 15);
        assert_eq!(body.questions.len(), 5);
        assert_eq!(body.questions[0].question, "Q10");
    }

    #[tokio::test]
    async fn get_questions_past_last_page_is_bad_request() {
        let server = get_test_server();
        let category = create_category(&server, "Science").await;
        create_question(&server, "Q1", category.id).await;

        let response = server.get(&format!("{}?page=2", endpoints::QUESTIONS)).await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<ErrorBody>().details, "Invalid Page Number");
    }

    #[tokio::test]
    async fn get_questions_with_non_numeric_page_is_bad_request() {
        let server = get_test_server();

        let response = server
            .get(&format!("{}?page=two", endpoints::QUESTIONS))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<ErrorBody>().code, 400);
    }

    #[tokio::test]
    async fn create_question_with_valid_payload() {
        let server = get_test_server();
        let category = create_category(&server, "Dummy").await;

        let response = server
            .post(endpoints::QUESTIONS)
            .json(&json!({
                "question": "Who moved my cheese?",
                "answer": "Not Me!",
                "difficulty": 5,
                "category": category.id,
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["question"], "Who moved my cheese?");
        assert_eq!(body["answer"], "Not Me!");
        assert_eq!(body["difficulty"], 5);
        assert_eq!(body["category_id"], category.id);
        assert_eq!(body["category"], json!({"id": category.id, "type": "Dummy"}));
        let question = response.json::<Question>();
        assert_eq!(question.difficulty, Difficulty::new_unchecked(5));

        let listed = server.get(endpoints::QUESTIONS).await.json::<QuestionPage>();
        assert_eq!(listed.questions, vec![question]);
    }

    #[tokio::test]
    async fn create_question_with_missing_category_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::QUESTIONS)
            .json(&json!({
                "question": "Who moved my cheese?",
                "answer": "Not Me!",
                "difficulty": 5,
                "category": 1,
            }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<ErrorBody>().details,
            "Specified category not found."
        );
    }

    #[tokio::test]
    async fn create_question_with_invalid_fields_is_bad_request() {
        let server = get_test_server();
        let category = create_category(&server, "Dummy").await;

        let payloads = [
            json!({"question": "", "answer": "Not Me!", "difficulty": 5, "category": category.id}),
            json!({"question": "Valid Question", "answer": "", "difficulty": 5, "category": category.id}),
            json!({"question": "Valid Question", "answer": "Valid Answer", "difficulty": 0, "category": category.id}),
            json!({"question": "Valid Question", "answer": "Valid Answer", "category": category.id}),
            json!({"question": "Valid Question", "answer": "Valid Answer", "difficulty": 2}),
        ];

        for payload in payloads {
            let response = server.post(endpoints::QUESTIONS).json(&payload).await;

            response.assert_status_bad_request();
            assert_eq!(
                response.json::<ErrorBody>().details,
                "Invalid question data.",
                "payload: {payload}"
            );
        }
    }

    #[tokio::test]
    async fn create_question_with_malformed_body_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::QUESTIONS)
            .text("{not json")
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<ErrorBody>().error, "Bad Request");
    }

    #[tokio::test]
    async fn search_matching_word() {
        let server = get_test_server();
        let category = create_category(&server, "Science").await;
        let question = create_question(&server, "Who moved my cheese", category.id).await;

        let response = server
            .post(endpoints::SEARCH_QUESTIONS)
            .json(&json!({"searchTerm": "CHEESE"}))
            .await;

        response.assert_status_ok();
        let body = response.json::<SearchResults>();
        assert_eq!(body.total_questions, 1);
        assert_eq!(body.questions, vec![question]);
        assert_eq!(body.current_category, None);
    }

    #[tokio::test]
    async fn search_non_matching_word() {
        let server = get_test_server();
        let category = create_category(&server, "Science").await;
        create_question(&server, "Who moved my cheese", category.id).await;

        let response = server
            .post(endpoints::SEARCH_QUESTIONS)
            .json(&json!({"searchTerm": "happy"}))
            .await;

        response.assert_status_ok();
        let body = response.json::<SearchResults>();
        assert_eq!(body.total_questions, 0);
        assert!(body.questions.is_empty());
    }

    #[tokio::test]
    async fn search_without_term_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::SEARCH_QUESTIONS)
            .json(&json!({}))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn delete_existing_question() {
        let server = get_test_server();
        let category = create_category(&server, "Science").await;
        let question = create_question(&server, "Who moved my cheese", category.id).await;

        let response = server
            .delete(&format_endpoint(endpoints::QUESTION, question.id))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Message>().message,
            "Question deleted successfully"
        );
        let listed = server.get(endpoints::QUESTIONS).await.json::<QuestionPage>();
        assert!(listed.questions.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_question_still_succeeds() {
        let server = get_test_server();
        let category = create_category(&server, "Science").await;
        let question = create_question(&server, "Who moved my cheese", category.id).await;

        let response = server
            .delete(&format_endpoint(endpoints::QUESTION, question.id + 1))
            .await;

        response.assert_status_ok();
        let listed = server.get(endpoints::QUESTIONS).await.json::<QuestionPage>();
        assert_eq!(listed.questions, vec![question]);
    }
}
