//! Create Question Use Case

use std::sync::Arc;

use kernel::id::{CategoryId, QuestionId};

use crate::domain::entities::NewQuestion;
use crate::domain::repository::QuestionRepository;
use crate::domain::value_objects::NonEmptyText;
use crate::error::{TriviaError, TriviaResult};

/// Input DTO for create question
///
/// Every field is required; `None` means the client omitted it or sent null.
#[derive(Debug, Clone, Default)]
pub struct CreateQuestionInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<CategoryId>,
}

impl CreateQuestionInput {
    /// Check required fields and build the domain value
    pub fn validate(self) -> TriviaResult<NewQuestion> {
        let question = required("question", self.question)?;
        let answer = required("answer", self.answer)?;
        let difficulty = required("difficulty", self.difficulty)?;
        let category = required("category", self.category)?;

        Ok(NewQuestion {
            question: NonEmptyText::new("question", question)?,
            answer: NonEmptyText::new("answer", answer)?,
            category,
            difficulty,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> TriviaResult<T> {
    value.ok_or_else(|| TriviaError::invalid_request(format!("Missing field: {}", field)))
}

/// Create Question Use Case
pub struct CreateQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> CreateQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    /// Returns the identifier storage assigned to the new question
    pub async fn execute(&self, input: CreateQuestionInput) -> TriviaResult<QuestionId> {
        let new_question = input.validate()?;
        let category = new_question.category;

        let created = self
            .question_repo
            .insert_question(new_question)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, category_id = %category, "Question insert failed");
                TriviaError::OperationFailed("Question could not be created".to_string())
            })?;

        tracing::info!(
            question_id = %created.id,
            category_id = %created.category,
            "Question created"
        );

        Ok(created.id)
    }
}
