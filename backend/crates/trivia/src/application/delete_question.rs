//! Delete Question Use Case

use std::sync::Arc;

use kernel::id::QuestionId;

use crate::domain::repository::QuestionRepository;
use crate::error::{TriviaError, TriviaResult};

/// Delete Question Use Case
pub struct DeleteQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> DeleteQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    /// Storage failures are reported as OperationFailed and not retried
    pub async fn execute(&self, id: QuestionId) -> TriviaResult<QuestionId> {
        let deleted = self
            .question_repo
            .delete_question(id)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, question_id = %id, "Question delete failed");
                TriviaError::OperationFailed(format!("Question {} could not be deleted", id))
            })?;

        if !deleted {
            return Err(TriviaError::not_found(format!("Question {} not found", id)));
        }

        tracing::info!(question_id = %id, "Question deleted");
        Ok(id)
    }
}
