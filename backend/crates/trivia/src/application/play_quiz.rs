//! Play Quiz Use Case
//!
//! Returns one random question the client has not seen yet. The session
//! lives entirely in the request: the same history always yields a draw from
//! the same candidate pool.

use std::sync::Arc;

use kernel::id::QuestionId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::services::{quiz_candidates, select_quiz_question};
use crate::domain::value_objects::{QuizCategory, QuizHistory};
use crate::error::{TriviaError, TriviaResult};

/// Input DTO for play quiz
///
/// Both fields are required; an empty history is valid, a missing one is not.
#[derive(Debug, Clone, Default)]
pub struct PlayQuizInput {
    pub previous_questions: Option<Vec<QuestionId>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Play Quiz Use Case
pub struct PlayQuizUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> PlayQuizUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    pub async fn execute(&self, input: PlayQuizInput) -> TriviaResult<Question> {
        let mut rng = StdRng::from_os_rng();
        self.execute_with_rng(input, &mut rng).await
    }

    /// Same as [`execute`](Self::execute) with a caller-supplied random source
    pub async fn execute_with_rng<R>(
        &self,
        input: PlayQuizInput,
        rng: &mut R,
    ) -> TriviaResult<Question>
    where
        R: Rng + Send,
    {
        let history: QuizHistory = input
            .previous_questions
            .ok_or_else(|| TriviaError::invalid_request("Missing field: previous_questions"))?
            .into_iter()
            .collect();
        let category = input
            .quiz_category
            .ok_or_else(|| TriviaError::invalid_request("Missing field: quiz_category"))?;

        let questions = self.question_repo.list_questions().await?;

        tracing::debug!(
            ?category,
            seen = history.len(),
            candidates = quiz_candidates(&questions, category, &history).len(),
            "Selecting quiz question"
        );

        let question = select_quiz_question(&questions, category, &history, rng)
            .ok_or_else(|| TriviaError::not_found("No more questions"))?;

        tracing::info!(question_id = %question.id, "Quiz question served");
        Ok(question)
    }
}
