//! PostgreSQL Repository Implementations

use kernel::id::{CategoryId, QuestionId};
use sqlx::PgPool;

use crate::domain::entities::{Category, NewQuestion, Question};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::error::TriviaResult;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgTriviaRepository {
    pool: PgPool,
}

impl PgTriviaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl QuestionRepository for PgTriviaRepository {
    async fn list_questions(&self) -> TriviaResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> TriviaResult<Question> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question.as_str())
        .bind(question.answer.as_str())
        .bind(question.category.value())
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(question_id = row.id, "Question row inserted");

        Ok(row.into_question())
    }

    async fn delete_question(&self, id: QuestionId) -> TriviaResult<bool> {
        let deleted = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(question_id = %id, rows = deleted, "Question row deleted");

        Ok(deleted > 0)
    }
}

impl CategoryRepository for PgTriviaRepository {
    async fn list_categories(&self) -> TriviaResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, "type"
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn find_category(&self, id: CategoryId) -> TriviaResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"SELECT id, "type" FROM categories WHERE id = $1"#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question {
            id: QuestionId::from_raw(self.id),
            question: self.question,
            answer: self.answer,
            category: CategoryId::from_raw(self.category),
            difficulty: self.difficulty,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            id: CategoryId::from_raw(self.id),
            kind: self.kind,
        }
    }
}
