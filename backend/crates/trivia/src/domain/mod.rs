//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Question, Category, NewQuestion)
//! - Domain value objects (Page, SearchTerm, QuizCategory, QuizHistory)
//! - Domain services (pagination, filtering, quiz selection)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
