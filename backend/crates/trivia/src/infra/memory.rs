//! In-Memory Repository
//!
//! Used for local development when no database is configured, and by the
//! test suite. Mirrors the PostgreSQL schema's guarantees: ids are assigned
//! monotonically and never reused, and a question must reference an
//! existing category.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::{CategoryId, QuestionId};
use tokio::sync::RwLock;

use crate::domain::entities::{Category, NewQuestion, Question};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::value_objects::NonEmptyText;
use crate::error::{TriviaError, TriviaResult};

const SEED_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category id, difficulty)
const SEED_QUESTIONS: &[(&str, &str, i64, i32)] = &[
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
];

#[derive(Debug, Default)]
struct MemoryState {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    last_category_id: i64,
    last_question_id: i64,
    fail_writes: bool,
}

impl MemoryState {
    fn add_category(&mut self, kind: &str) -> Category {
        self.last_category_id += 1;
        let category = Category {
            id: CategoryId::from_raw(self.last_category_id),
            kind: kind.to_string(),
        };
        self.categories.insert(category.id, category.clone());
        category
    }

    fn add_question(&mut self, new_question: NewQuestion) -> TriviaResult<Question> {
        if !self.categories.contains_key(&new_question.category) {
            return Err(TriviaError::Internal(format!(
                "category {} does not exist",
                new_question.category
            )));
        }
        self.last_question_id += 1;
        let question = new_question.into_question(QuestionId::from_raw(self.last_question_id));
        self.questions.insert(question.id, question.clone());
        Ok(question)
    }
}

/// In-memory repository backed by ordered maps
#[derive(Clone, Default)]
pub struct InMemoryTriviaRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryTriviaRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Six standard categories and a handful of sample questions
    pub fn seeded() -> Self {
        let mut state = MemoryState::default();
        for kind in SEED_CATEGORIES {
            state.add_category(kind);
        }
        for (question, answer, category, difficulty) in SEED_QUESTIONS {
            let seeded = seed_question(question, answer, *category, *difficulty)
                .and_then(|new_question| state.add_question(new_question));
            if let Err(e) = seeded {
                tracing::warn!(error = %e, "Skipping seed question");
            }
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub async fn add_category(&self, kind: &str) -> Category {
        self.state.write().await.add_category(kind)
    }

    /// Make every subsequent insert/delete fail as if storage were down
    #[cfg(test)]
    pub(crate) async fn set_fail_writes(&self, fail: bool) {
        self.state.write().await.fail_writes = fail;
    }
}

fn seed_question(
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i32,
) -> TriviaResult<NewQuestion> {
    Ok(NewQuestion {
        question: NonEmptyText::new("question", question.to_string())?,
        answer: NonEmptyText::new("answer", answer.to_string())?,
        category: CategoryId::from_raw(category),
        difficulty,
    })
}

impl QuestionRepository for InMemoryTriviaRepository {
    async fn list_questions(&self) -> TriviaResult<Vec<Question>> {
        Ok(self.state.read().await.questions.values().cloned().collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> TriviaResult<Question> {
        let mut state = self.state.write().await;
        if state.fail_writes {
            return Err(TriviaError::Internal("storage unavailable".to_string()));
        }
        state.add_question(question)
    }

    async fn delete_question(&self, id: QuestionId) -> TriviaResult<bool> {
        let mut state = self.state.write().await;
        if state.fail_writes {
            return Err(TriviaError::Internal("storage unavailable".to_string()));
        }
        Ok(state.questions.remove(&id).is_some())
    }
}

impl CategoryRepository for InMemoryTriviaRepository {
    async fn list_categories(&self) -> TriviaResult<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: CategoryId) -> TriviaResult<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }
}
