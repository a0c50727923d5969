//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//! Each call is expected to be atomic on its own; no cross-call transaction
//! is modeled.

use kernel::id::{CategoryId, QuestionId};

use crate::domain::entities::{Category, NewQuestion, Question};
use crate::error::TriviaResult;

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// All questions, ascending by id
    async fn list_questions(&self) -> TriviaResult<Vec<Question>>;

    /// Insert a question and return it with its assigned id
    async fn insert_question(&self, question: NewQuestion) -> TriviaResult<Question>;

    /// Delete a question. Returns false if no such question existed.
    async fn delete_question(&self, id: QuestionId) -> TriviaResult<bool>;
}

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// All categories, ascending by id
    async fn list_categories(&self) -> TriviaResult<Vec<Category>>;

    /// Find category by ID
    async fn find_category(&self, id: CategoryId) -> TriviaResult<Option<Category>>;
}
