//! Trivia Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, pure selection logic, repository traits
//! - `application/` - Use cases, one per API operation
//! - `infra/` - PostgreSQL and in-memory repository implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Quiz Model
//! - Quiz progress lives entirely in the client-supplied history; the server
//!   keeps no session state between calls
//! - The history is trusted as sent: replaying or omitting ids only affects
//!   that client's own quiz
//! - Each call re-reads the question set, so writes are visible immediately

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TriviaConfig;
pub use error::{TriviaError, TriviaResult};
pub use infra::memory::InMemoryTriviaRepository;
pub use infra::postgres::PgTriviaRepository;
pub use presentation::router::{trivia_router, trivia_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
