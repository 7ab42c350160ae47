#![allow(missing_docs)]

pub(crate) mod fixtures;
pub(crate) mod http;

pub(crate) use fixtures::{
    create_category, create_question, get_test_server, get_test_stores, insert_questions,
};
pub(crate) use http::{assert_content_type, parse_json_body};
