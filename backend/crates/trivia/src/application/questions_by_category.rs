//! Questions By Category Use Case

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::entities::Question;
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::services::by_category;
use crate::error::{TriviaError, TriviaResult};

/// Output DTO for questions by category
#[derive(Debug, Clone)]
pub struct QuestionsByCategoryOutput {
    pub questions: Vec<Question>,
    pub current_category: CategoryId,
}

/// Questions By Category Use Case
pub struct QuestionsByCategoryUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    question_repo: Arc<Q>,
    category_repo: Arc<C>,
}

impl<Q, C> QuestionsByCategoryUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    pub fn new(question_repo: Arc<Q>, category_repo: Arc<C>) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    /// An unknown category and a category without questions are both NotFound
    pub async fn execute(
        &self,
        category_id: CategoryId,
    ) -> TriviaResult<QuestionsByCategoryOutput> {
        let category = self
            .category_repo
            .find_category(category_id)
            .await?
            .ok_or_else(|| TriviaError::not_found(format!("Category {} not found", category_id)))?;

        let questions = by_category(self.question_repo.list_questions().await?, category.id);
        if questions.is_empty() {
            return Err(TriviaError::not_found(format!(
                "No questions in category {}",
                category_id
            )));
        }

        tracing::debug!(
            category_id = %category.id,
            category = %category.kind,
            count = questions.len(),
            "Listed questions by category"
        );

        Ok(QuestionsByCategoryOutput {
            questions,
            current_category: category.id,
        })
    }
}
