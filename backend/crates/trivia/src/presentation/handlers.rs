//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppError;
use kernel::id::{CategoryId, QuestionId};
use std::sync::Arc;

use crate::application::config::TriviaConfig;
use crate::application::{
    CreateQuestionInput, CreateQuestionUseCase, DeleteQuestionUseCase, ListCategoriesUseCase,
    ListQuestionsUseCase, PlayQuizInput, PlayQuizUseCase, QuestionsByCategoryUseCase,
    SearchQuestionsUseCase,
};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::error::{TriviaError, TriviaResult};
use crate::presentation::dto::{
    CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest, CreateQuestionResponse,
    DeleteQuestionResponse, ListQuestionsQuery, QuestionsPageResponse, QuizRequest, QuizResponse,
    SearchRequest, SearchResponse, category_map, question_dtos,
};

/// Shared state for trivia handlers
#[derive(Clone)]
pub struct TriviaAppState<R>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<TriviaConfig>,
}

/// Body that could not be parsed is treated like a body missing its fields
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> TriviaResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| TriviaError::invalid_request(rejection.body_text()))
}

/// Non-integer ids never match a record
fn path_id(path: Result<Path<i64>, PathRejection>) -> TriviaResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|_| TriviaError::not_found("Resource not found"))
}

// ============================================================================
// Categories
// ============================================================================

/// GET /categories
pub async fn list_categories<R>(
    State(state): State<TriviaAppState<R>>,
) -> TriviaResult<Json<CategoriesResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCategoriesUseCase::new(state.repo.clone());
    let output = use_case.execute().await?;

    let categories = category_map(output.categories);
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions
pub async fn questions_by_category<R>(
    State(state): State<TriviaAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> TriviaResult<Json<CategoryQuestionsResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let category_id = CategoryId::from_raw(path_id(path)?);

    let use_case = QuestionsByCategoryUseCase::new(state.repo.clone(), state.repo.clone());
    let output = use_case.execute(category_id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: output.questions.len(),
        questions: question_dtos(output.questions),
        current_category: output.current_category,
    }))
}

// ============================================================================
// Questions
// ============================================================================

/// GET /questions?page=N
pub async fn list_questions<R>(
    State(state): State<TriviaAppState<R>>,
    query: Result<Query<ListQuestionsQuery>, QueryRejection>,
) -> TriviaResult<Json<QuestionsPageResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let Query(query) =
        query.map_err(|rejection| TriviaError::invalid_request(rejection.body_text()))?;

    let use_case =
        ListQuestionsUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());
    let output = use_case.execute(query.page_number()).await?;

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions: question_dtos(output.questions),
        categories: category_map(output.categories),
        total_questions: output.total_questions,
    }))
}

/// POST /questions
pub async fn create_question<R>(
    State(state): State<TriviaAppState<R>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> TriviaResult<Json<CreateQuestionResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let input = CreateQuestionInput::try_from(body(payload)?)?;

    let use_case = CreateQuestionUseCase::new(state.repo.clone());
    let created = use_case.execute(input).await?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created,
    }))
}

/// DELETE /questions/{id}
pub async fn delete_question<R>(
    State(state): State<TriviaAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> TriviaResult<Json<DeleteQuestionResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let question_id = QuestionId::from_raw(path_id(path)?);

    let use_case = DeleteQuestionUseCase::new(state.repo.clone());
    let deleted = use_case.execute(question_id).await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted,
        status_code: StatusCode::OK.as_u16(),
    }))
}

/// POST /questions/search
pub async fn search_questions<R>(
    State(state): State<TriviaAppState<R>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> TriviaResult<Json<SearchResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let req = body(payload)?;

    let use_case = SearchQuestionsUseCase::new(state.repo.clone());
    let output = use_case.execute(req.search_term).await?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: output.questions.len(),
        questions: question_dtos(output.questions),
        current_category: None,
    }))
}

// ============================================================================
// Quiz
// ============================================================================

/// POST /quizzes
pub async fn play_quiz<R>(
    State(state): State<TriviaAppState<R>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> TriviaResult<Json<QuizResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let input = PlayQuizInput::try_from(body(payload)?)?;

    let use_case = PlayQuizUseCase::new(state.repo.clone());
    let question = use_case.execute(input).await?;

    Ok(Json(QuizResponse {
        success: true,
        question: question.into(),
    }))
}

// ============================================================================
// Fallbacks
// ============================================================================

/// Any unknown path
pub async fn route_not_found() -> AppError {
    AppError::not_found("Not found")
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("Method not allowed")
}
