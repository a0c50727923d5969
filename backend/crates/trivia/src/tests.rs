//! Integration tests for the trivia crate
//! Drives the router end to end against the in-memory repository.

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::TriviaConfig;
    use crate::infra::memory::InMemoryTriviaRepository;
    use crate::presentation::router::trivia_router_generic;

    fn app(repo: InMemoryTriviaRepository) -> Router {
        trivia_router_generic(repo, TriviaConfig::default())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn assert_error(body: &Value, status: StatusCode) {
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], status.as_u16());
        assert!(body["message"].is_string());
    }

    /// Three categories, two questions each: ids 1..=6, category (id + 1) / 2
    async fn small_repo() -> InMemoryTriviaRepository {
        let repo = InMemoryTriviaRepository::new();
        for kind in ["Science", "Art", "Geography"] {
            repo.add_category(kind).await;
        }
        let app = app(repo.clone());
        for i in 1..=6 {
            let (status, _) = send(
                &app,
                Method::POST,
                "/questions",
                Some(json!({
                    "question": format!("Question {}", i),
                    "answer": format!("Answer {}", i),
                    "difficulty": 1,
                    "category": (i + 1) / 2,
                })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }
        repo
    }

    #[tokio::test]
    async fn test_list_categories() {
        let app = app(InMemoryTriviaRepository::seeded());
        let (status, body) = send(&app, Method::GET, "/categories", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_categories"], 6);
        assert_eq!(body["categories"]["1"], "Science");
        assert_eq!(body["categories"]["6"], "Sports");
    }

    #[tokio::test]
    async fn test_list_questions_paginates() {
        let repo = InMemoryTriviaRepository::seeded();
        let extra = repo.add_category("Extra").await;
        let app = app(repo);
        for i in 0..15 {
            send(
                &app,
                Method::POST,
                "/questions",
                Some(json!({
                    "question": format!("Extra {}", i),
                    "answer": "x",
                    "difficulty": "2",
                    "category": extra.id.value(),
                })),
            )
            .await;
        }

        let (status, body) = send(&app, Method::GET, "/questions?page=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalQuestions"], 25);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["categories"].as_object().unwrap().len(), 7);

        let (_, body) = send(&app, Method::GET, "/questions?page=3", None).await;
        assert_eq!(body["questions"].as_array().unwrap().len(), 5);

        let (status, body) = send(&app, Method::GET, "/questions?page=100", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["questions"].as_array().unwrap().is_empty());
        assert_eq!(body["totalQuestions"], 25);
    }

    #[tokio::test]
    async fn test_list_questions_page_defaults_and_rejects() {
        let app = app(InMemoryTriviaRepository::seeded());

        let (status, body) = send(&app, Method::GET, "/questions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"][0]["id"], 1);

        let (status, _) = send(&app, Method::GET, "/questions?page=abc", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, "/questions?page=0", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&body, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_then_delete_question() {
        let app = app(InMemoryTriviaRepository::seeded());

        let (status, body) = send(
            &app,
            Method::POST,
            "/questions",
            Some(json!({
                "question": "What is the capital of France?",
                "answer": "Paris",
                "difficulty": 1,
                "category": "3",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let created = body["created"].as_i64().unwrap();
        assert_eq!(created, 11);

        let (_, body) = send(&app, Method::GET, "/questions?page=2", None).await;
        assert_eq!(body["questions"][0]["answer"], "Paris");

        let uri = format!("/questions/{}", created);
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], created);
        assert_eq!(body["status_code"], 200);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error(&body, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, Method::GET, "/questions", None).await;
        assert_eq!(body["totalQuestions"], 10);
    }

    #[tokio::test]
    async fn test_create_question_validation() {
        let app = app(InMemoryTriviaRepository::seeded());

        let (status, body) = send(
            &app,
            Method::POST,
            "/questions",
            Some(json!({ "question": "No answer?", "difficulty": 1, "category": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&body, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            Method::POST,
            "/questions",
            Some(json!({ "question": "Q", "answer": "A", "difficulty": "hard", "category": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            Method::POST,
            "/questions",
            Some(json!({ "question": "  ", "answer": "A", "difficulty": 1, "category": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/questions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_question_unknown_category_fails() {
        let app = app(InMemoryTriviaRepository::seeded());
        let (status, body) = send(
            &app,
            Method::POST,
            "/questions",
            Some(json!({ "question": "Q", "answer": "A", "difficulty": 1, "category": 999 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Question could not be created");
    }

    #[tokio::test]
    async fn test_write_failures_are_unprocessable() {
        let repo = InMemoryTriviaRepository::seeded();
        repo.set_fail_writes(true).await;
        let app = app(repo);

        let (status, body) = send(&app, Method::DELETE, "/questions/1", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&body, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            Method::POST,
            "/questions",
            Some(json!({ "question": "Q", "answer": "A", "difficulty": 1, "category": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_delete_non_integer_id_is_not_found() {
        let app = app(InMemoryTriviaRepository::seeded());
        let (status, body) = send(&app, Method::DELETE, "/questions/abc", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error(&body, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_questions() {
        let app = app(InMemoryTriviaRepository::seeded());

        let (status, body) = send(
            &app,
            Method::POST,
            "/questions/search",
            Some(json!({ "searchTerm": "TITLE" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_questions"], 1);
        assert_eq!(body["questions"][0]["answer"], "Maya Angelou");
        assert!(body["current_category"].is_null());

        let (status, body) = send(
            &app,
            Method::POST,
            "/questions/search",
            Some(json!({ "searchTerm": "zzzz-no-match" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_questions"], 0);

        let (status, body) = send(&app, Method::POST, "/questions/search", Some(json!({}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&body, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_questions_by_category() {
        let app = app(InMemoryTriviaRepository::seeded());

        let (status, body) = send(&app, Method::GET, "/categories/1/questions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalQuestions"], 3);
        assert_eq!(body["currentCategory"], 1);
        assert!(
            body["questions"]
                .as_array()
                .unwrap()
                .iter()
                .all(|q| q["category"] == 1)
        );

        let (status, body) = send(&app, Method::GET, "/categories/999/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error(&body, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_questions_by_empty_category_is_not_found() {
        let repo = InMemoryTriviaRepository::seeded();
        let empty = repo.add_category("Empty").await;
        let app = app(repo);

        let (status, body) = send(&app, Method::GET, "/categories", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"][empty.id.to_string()], "Empty");

        let uri = format!("/categories/{}/questions", empty.id);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error(&body, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quiz_runs_until_exhausted() {
        let app = app(small_repo().await);
        let mut previous: Vec<i64> = Vec::new();

        for _ in 0..6 {
            let (status, body) = send(
                &app,
                Method::POST,
                "/quizzes",
                Some(json!({
                    "previous_questions": previous,
                    "quiz_category": { "type": "click", "id": 0 },
                })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            let id = body["question"]["id"].as_i64().unwrap();
            assert!(!previous.contains(&id));
            previous.push(id);
        }

        previous.sort_unstable();
        assert_eq!(previous, vec![1, 2, 3, 4, 5, 6]);

        let (status, body) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": previous,
                "quiz_category": { "type": "click", "id": 0 },
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error(&body, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quiz_scoped_to_category() {
        let app = app(small_repo().await);

        let (status, body) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": [3],
                "quiz_category": { "type": "Art", "id": "2" },
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], 4);
        assert_eq!(body["question"]["category"], 2);

        let (status, _) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "previous_questions": [3, 4],
                "quiz_category": { "type": "Art", "id": 2 },
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quiz_requires_both_fields() {
        let app = app(InMemoryTriviaRepository::seeded());

        let (status, body) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({ "quiz_category": { "type": "click", "id": 0 } })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&body, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({ "previous_questions": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(&app, Method::POST, "/quizzes", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_route_and_method() {
        let app = app(InMemoryTriviaRepository::seeded());

        let (status, body) = send(&app, Method::GET, "/nowhere", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error(&body, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, Method::PATCH, "/categories", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_error(&body, StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::{CategoryId, QuestionId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tokio_test::{assert_err, assert_ok};

    use crate::application::{
        CreateQuestionInput, CreateQuestionUseCase, DeleteQuestionUseCase, PlayQuizInput,
        PlayQuizUseCase, SearchQuestionsUseCase,
    };
    use crate::domain::value_objects::QuizCategory;
    use crate::error::TriviaError;
    use crate::infra::memory::InMemoryTriviaRepository;

    #[tokio::test]
    async fn test_quiz_with_seeded_rng_is_reproducible() {
        let repo = Arc::new(InMemoryTriviaRepository::seeded());
        let use_case = PlayQuizUseCase::new(repo);
        let input = PlayQuizInput {
            previous_questions: Some(Vec::new()),
            quiz_category: Some(QuizCategory::All),
        };

        let first = assert_ok!(
            use_case
                .execute_with_rng(input.clone(), &mut StdRng::seed_from_u64(7))
                .await
        );
        let second = assert_ok!(
            use_case
                .execute_with_rng(input, &mut StdRng::seed_from_u64(7))
                .await
        );
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_quiz_unknown_category_is_not_found() {
        let use_case = PlayQuizUseCase::new(Arc::new(InMemoryTriviaRepository::seeded()));
        let err = assert_err!(
            use_case
                .execute(PlayQuizInput {
                    previous_questions: Some(Vec::new()),
                    quiz_category: Some(QuizCategory::Specific(CategoryId::from_raw(42))),
                })
                .await
        );
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_search_validates_before_reading() {
        let repo = Arc::new(InMemoryTriviaRepository::seeded());
        let use_case = SearchQuestionsUseCase::new(repo);
        let err = assert_err!(use_case.execute(None).await);
        assert!(matches!(err, TriviaError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_create_and_delete_use_cases() {
        let repo = Arc::new(InMemoryTriviaRepository::seeded());

        let created = assert_ok!(
            CreateQuestionUseCase::new(repo.clone())
                .execute(CreateQuestionInput {
                    question: Some("Who painted the Sistine Chapel ceiling?".to_string()),
                    answer: Some("Michelangelo".to_string()),
                    difficulty: Some(2),
                    category: Some(CategoryId::from_raw(2)),
                })
                .await
        );

        let delete = DeleteQuestionUseCase::new(repo);
        assert_eq!(assert_ok!(delete.execute(created).await), created);

        let err = assert_err!(delete.execute(QuestionId::from_raw(999)).await);
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_missing_field_never_writes() {
        let repo = Arc::new(InMemoryTriviaRepository::seeded());
        repo.set_fail_writes(true).await;

        let err = assert_err!(
            CreateQuestionUseCase::new(repo)
                .execute(CreateQuestionInput {
                    question: Some("Q".to_string()),
                    ..Default::default()
                })
                .await
        );
        assert!(matches!(err, TriviaError::InvalidRequest(_)));
    }
}

#[cfg(test)]
mod dto_tests {
    use serde_json::json;

    use crate::application::{CreateQuestionInput, PlayQuizInput};
    use crate::domain::value_objects::QuizCategory;
    use crate::presentation::dto::{
        CreateQuestionRequest, IntOrString, ListQuestionsQuery, QuizRequest,
    };
    use kernel::id::CategoryId;

    #[test]
    fn test_int_or_string() {
        assert_eq!(IntOrString::Int(3).parse("x").unwrap(), 3);
        assert_eq!(IntOrString::Str(" 4 ".into()).parse("x").unwrap(), 4);
        assert!(IntOrString::Str("four".into()).parse("x").is_err());
    }

    #[test]
    fn test_page_number_fallback() {
        let query = |page: Option<&str>| ListQuestionsQuery {
            page: page.map(str::to_string),
        };
        assert_eq!(query(None).page_number(), 1);
        assert_eq!(query(Some("abc")).page_number(), 1);
        assert_eq!(query(Some("3")).page_number(), 3);
        assert_eq!(query(Some("-2")).page_number(), -2);
    }

    #[test]
    fn test_create_request_accepts_string_numbers() {
        let req: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "Q",
            "answer": "A",
            "difficulty": "5",
            "category": "2",
        }))
        .unwrap();
        let input = CreateQuestionInput::try_from(req).unwrap();
        assert_eq!(input.difficulty, Some(5));
        assert_eq!(input.category, Some(CategoryId::from_raw(2)));
    }

    #[test]
    fn test_quiz_request_sentinel() {
        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": { "type": "click", "id": 0 },
        }))
        .unwrap();
        let input = PlayQuizInput::try_from(req).unwrap();
        assert_eq!(input.quiz_category, Some(QuizCategory::All));

        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [1],
            "quiz_category": { "type": "Science", "id": "1" },
        }))
        .unwrap();
        let input = PlayQuizInput::try_from(req).unwrap();
        assert_eq!(
            input.quiz_category,
            Some(QuizCategory::Specific(CategoryId::from_raw(1)))
        );
    }

    #[test]
    fn test_quiz_request_specific_without_id() {
        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": { "type": "Science" },
        }))
        .unwrap();
        assert!(PlayQuizInput::try_from(req).is_err());
    }
}
