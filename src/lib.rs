//! A REST API for a trivia game.
//!
//! Clients can browse questions by page or by category, search question text,
//! add and delete questions and categories, and play a quiz that hands out
//! random questions the player has not seen yet.
//!
//! Every response body is JSON, including errors which are sent as
//! `{"code": ..., "error": ..., "details": ...}`.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod category;
mod db;
pub mod endpoints;
mod error;
mod logging;
mod pagination;
mod question;
mod routing;
mod services;
pub mod stores;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, CategoryId, CategoryType};
pub use db::initialize as initialize_db;
pub use error::{Error, ErrorBody};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::{PaginationConfig, QUESTIONS_PER_PAGE};
pub use question::{Difficulty, NewQuestion, Question, QuestionId};
pub use routing::build_router;
pub use stores::sqlite::create_app_state;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
