//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! One use case per API operation.

pub mod config;
pub mod create_question;
pub mod delete_question;
pub mod list_categories;
pub mod list_questions;
pub mod play_quiz;
pub mod questions_by_category;
pub mod search_questions;

// Re-exports
pub use config::TriviaConfig;
pub use create_question::{CreateQuestionInput, CreateQuestionUseCase};
pub use delete_question::DeleteQuestionUseCase;
pub use list_categories::{ListCategoriesOutput, ListCategoriesUseCase};
pub use list_questions::{ListQuestionsOutput, ListQuestionsUseCase};
pub use play_quiz::{PlayQuizInput, PlayQuizUseCase};
pub use questions_by_category::{QuestionsByCategoryOutput, QuestionsByCategoryUseCase};
pub use search_questions::{SearchQuestionsOutput, SearchQuestionsUseCase};
