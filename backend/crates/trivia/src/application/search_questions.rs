//! Search Questions Use Case

use std::sync::Arc;

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::services::search;
use crate::domain::value_objects::SearchTerm;
use crate::error::TriviaResult;

/// Output DTO for search questions
#[derive(Debug, Clone)]
pub struct SearchQuestionsOutput {
    pub questions: Vec<Question>,
}

/// Search Questions Use Case
pub struct SearchQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> SearchQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    /// A missing term is rejected before storage is read; a term without
    /// matches is an empty success
    pub async fn execute(&self, term: Option<String>) -> TriviaResult<SearchQuestionsOutput> {
        let term = SearchTerm::new(term)?;

        let questions = search(self.question_repo.list_questions().await?, &term);

        tracing::debug!(
            term = term.as_str(),
            matches = questions.len(),
            "Searched questions"
        );

        Ok(SearchQuestionsOutput { questions })
    }
}
