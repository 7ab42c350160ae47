use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use rusqlite::Connection;
use serde_json::json;

use crate::{
    build_router,
    category::{Category, CategoryId},
    db::initialize,
    endpoints,
    pagination::PaginationConfig,
    question::{Difficulty, NewQuestion, Question},
    stores::{
        QuestionStore,
        sqlite::{SQLiteCategoryStore, SQLiteQuestionStore, create_app_state},
    },
};

/// Stores backed by a fresh in-memory database that share one connection.
pub(crate) fn get_test_stores() -> (SQLiteCategoryStore, SQLiteQuestionStore) {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");
    let connection = Arc::new(Mutex::new(connection));

    (
        SQLiteCategoryStore::new(connection.clone()),
        SQLiteQuestionStore::new(connection),
    )
}

/// Insert `count` questions titled "Question 0", "Question 1", ... into `category_id`.
pub(crate) fn insert_questions(
    store: &SQLiteQuestionStore,
    category_id: CategoryId,
    count: usize,
) -> Vec<Question> {
    (0..count)
        .map(|i| {
            store
                .create(NewQuestion {
                    question: format!("Question {i}"),
                    answer: format!("Answer {i}"),
                    difficulty: Difficulty::new_unchecked(i as i64 % 4 + 1),
                    category_id,
                })
                .expect("Could not create question")
        })
        .collect()
}

pub(crate) fn get_test_server() -> TestServer {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    let state = create_app_state(connection, PaginationConfig::default())
        .expect("Could not create app state");

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

pub(crate) async fn create_category(server: &TestServer, category_type: &str) -> Category {
    let response = server
        .post(endpoints::CATEGORIES)
        .json(&json!({ "type": category_type }))
        .await;

    response.assert_status_ok();
    response.json::<Category>()
}

pub(crate) async fn create_question(
    server: &TestServer,
    question: &str,
    category_id: CategoryId,
) -> Question {
    let response = server
        .post(endpoints::QUESTIONS)
        .json(&json!({
            "question": question,
            "answer": format!("The answer to {question}"),
            "difficulty": 2,
            "category": category_id,
        }))
        .await;

    response.assert_status_ok();
    response.json::<Question>()
}
