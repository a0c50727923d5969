//! Domain Entities
//!
//! Records owned by the storage collaborator. The core only reads them,
//! creates questions, and deletes questions; nothing is updated in place.

use kernel::id::{CategoryId, QuestionId};

use crate::domain::value_objects::NonEmptyText;

/// Question entity - a stored trivia prompt with its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// Category entity - read-only from the API's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    /// Display name, e.g. "Science"
    pub kind: String,
}

/// A validated question that has not been assigned an id yet
///
/// Category existence is left to storage (foreign key), not checked here.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: NonEmptyText,
    pub answer: NonEmptyText,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attach the identifier storage assigned on insert
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question.into_inner(),
            answer: self.answer.into_inner(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
