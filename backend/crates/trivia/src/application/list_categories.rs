//! List Categories Use Case

use std::sync::Arc;

use crate::domain::entities::Category;
use crate::domain::repository::CategoryRepository;
use crate::error::TriviaResult;

/// Output DTO for list categories
#[derive(Debug, Clone)]
pub struct ListCategoriesOutput {
    pub categories: Vec<Category>,
}

/// List Categories Use Case
pub struct ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self) -> TriviaResult<ListCategoriesOutput> {
        let categories = self.category_repo.list_categories().await?;
        tracing::debug!(count = categories.len(), "Listed categories");
        Ok(ListCategoriesOutput { categories })
    }
}
