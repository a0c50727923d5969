//! List Questions Use Case
//!
//! One page of all questions, ascending by id, plus the category map the
//! client needs to label them.

use std::sync::Arc;

use crate::application::config::TriviaConfig;
use crate::domain::entities::{Category, Question};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::services::paginate;
use crate::domain::value_objects::Page;
use crate::error::TriviaResult;

/// Output DTO for list questions
#[derive(Debug, Clone)]
pub struct ListQuestionsOutput {
    pub questions: Vec<Question>,
    /// Size of the whole collection, not of this page
    pub total_questions: usize,
    pub categories: Vec<Category>,
}

/// List Questions Use Case
pub struct ListQuestionsUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    question_repo: Arc<Q>,
    category_repo: Arc<C>,
    config: Arc<TriviaConfig>,
}

impl<Q, C> ListQuestionsUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    pub fn new(question_repo: Arc<Q>, category_repo: Arc<C>, config: Arc<TriviaConfig>) -> Self {
        Self {
            question_repo,
            category_repo,
            config,
        }
    }

    /// Pages past the end produce an empty list, not an error
    pub async fn execute(&self, page_number: i64) -> TriviaResult<ListQuestionsOutput> {
        let page = Page::new(page_number, self.config.questions_per_page)?;

        let all = self.question_repo.list_questions().await?;
        let categories = self.category_repo.list_categories().await?;
        let questions = paginate(&all, page).to_vec();

        tracing::debug!(
            page = page.number(),
            returned = questions.len(),
            total = all.len(),
            "Listed questions"
        );

        Ok(ListQuestionsOutput {
            questions,
            total_questions: all.len(),
            categories,
        })
    }
}
