//! Trivia Router

use crate::application::config::TriviaConfig;
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::infra::postgres::PgTriviaRepository;
use crate::presentation::handlers::{self, TriviaAppState};
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

/// Create the trivia router with PostgreSQL repository
pub fn trivia_router(repo: PgTriviaRepository, config: TriviaConfig) -> Router {
    trivia_router_generic(repo, config)
}

/// Create a generic trivia router for any repository implementation
pub fn trivia_router_generic<R>(repo: R, config: TriviaConfig) -> Router
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = TriviaAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/categories", get(handlers::list_categories::<R>))
        .route(
            "/categories/{id}/questions",
            get(handlers::questions_by_category::<R>),
        )
        .route(
            "/questions",
            get(handlers::list_questions::<R>).post(handlers::create_question::<R>),
        )
        .route("/questions/{id}", delete(handlers::delete_question::<R>))
        .route("/questions/search", post(handlers::search_questions::<R>))
        .route("/quizzes", post(handlers::play_quiz::<R>))
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}
