//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the wire format the trivia frontend already speaks,
//! which mixes snake_case and camelCase.

use std::collections::BTreeMap;

use kernel::id::{CategoryId, QuestionId};
use serde::{Deserialize, Serialize};

use crate::application::{CreateQuestionInput, PlayQuizInput};
use crate::domain::entities::{Category, Question};
use crate::domain::value_objects::{Page, QuizCategory};
use crate::error::{TriviaError, TriviaResult};

/// `quiz_category.type` value the frontend sends for "all categories"
pub const ALL_CATEGORIES_SENTINEL: &str = "click";

// ============================================================================
// Shared
// ============================================================================

/// Question as serialized in every response
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

pub fn question_dtos(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(QuestionDto::from).collect()
}

/// `{ "1": "Science", "2": "Art", ... }`
pub type CategoryMap = BTreeMap<CategoryId, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Integer that the frontend sometimes sends as a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    pub fn parse(&self, field: &str) -> TriviaResult<i64> {
        match self {
            IntOrString::Int(v) => Ok(*v),
            IntOrString::Str(s) => s.trim().parse().map_err(|_| {
                TriviaError::invalid_request(format!("Field '{}' must be an integer", field))
            }),
        }
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Response for GET /categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Response for GET /categories/{id}/questions
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: CategoryId,
}

// ============================================================================
// Questions
// ============================================================================

/// Query string for GET /questions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuestionsQuery {
    pub page: Option<String>,
}

impl ListQuestionsQuery {
    /// A missing or non-numeric page falls back to the first page
    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(Page::DEFAULT_NUMBER as i64)
    }
}

/// Response for GET /questions
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub categories: CategoryMap,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

/// Request for POST /questions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<IntOrString>,
    pub category: Option<IntOrString>,
}

impl TryFrom<CreateQuestionRequest> for CreateQuestionInput {
    type Error = TriviaError;

    fn try_from(req: CreateQuestionRequest) -> TriviaResult<Self> {
        let difficulty = req
            .difficulty
            .map(|d| {
                let value = d.parse("difficulty")?;
                i32::try_from(value).map_err(|_| {
                    TriviaError::invalid_request("Field 'difficulty' is out of range")
                })
            })
            .transpose()?;
        let category = req
            .category
            .map(|c| c.parse("category").map(CategoryId::from_raw))
            .transpose()?;

        Ok(CreateQuestionInput {
            question: req.question,
            answer: req.answer,
            difficulty,
            category,
        })
    }
}

/// Response for POST /questions
#[derive(Debug, Clone, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: QuestionId,
}

/// Response for DELETE /questions/{id}
#[derive(Debug, Clone, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: QuestionId,
    pub status_code: u16,
}

/// Request for POST /questions/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Response for POST /questions/search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    /// Search is not scoped to a category; always null
    pub current_category: Option<CategoryId>,
}

// ============================================================================
// Quiz
// ============================================================================

/// `quiz_category` object of the quiz request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryDto {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<IntOrString>,
}

impl TryFrom<QuizCategoryDto> for QuizCategory {
    type Error = TriviaError;

    fn try_from(dto: QuizCategoryDto) -> TriviaResult<Self> {
        if dto.kind.as_deref() == Some(ALL_CATEGORIES_SENTINEL) {
            return Ok(QuizCategory::All);
        }
        let id = dto
            .id
            .ok_or_else(|| TriviaError::invalid_request("Missing field: quiz_category.id"))?
            .parse("quiz_category.id")?;
        Ok(QuizCategory::Specific(CategoryId::from_raw(id)))
    }
}

/// Request for POST /quizzes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<QuestionId>>,
    pub quiz_category: Option<QuizCategoryDto>,
}

impl TryFrom<QuizRequest> for PlayQuizInput {
    type Error = TriviaError;

    fn try_from(req: QuizRequest) -> TriviaResult<Self> {
        Ok(PlayQuizInput {
            previous_questions: req.previous_questions,
            quiz_category: req.quiz_category.map(QuizCategory::try_from).transpose()?,
        })
    }
}

/// Response for POST /quizzes
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuestionDto,
}
