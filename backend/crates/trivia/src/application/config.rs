//! Application Configuration
//!
//! Configuration for the trivia application layer.

use crate::domain::value_objects::Page;

/// Trivia application configuration
#[derive(Debug, Clone)]
pub struct TriviaConfig {
    /// Number of questions per page on the question listing
    pub questions_per_page: usize,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            questions_per_page: Page::DEFAULT_SIZE,
        }
    }
}

impl TriviaConfig {
    /// Override the page size; zero falls back to the default
    pub fn with_questions_per_page(questions_per_page: usize) -> Self {
        if questions_per_page == 0 {
            tracing::warn!("questions_per_page must be positive, using default");
            return Self::default();
        }
        Self { questions_per_page }
    }
}
