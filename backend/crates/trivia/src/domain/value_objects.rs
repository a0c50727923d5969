//! Domain Value Objects
//!
//! Immutable, validated inputs for the selection engine.

use std::collections::HashSet;
use std::ops::Range;

use kernel::id::{CategoryId, QuestionId};

use crate::error::{TriviaError, TriviaResult};

/// Text that must contain at least one character (question and answer bodies)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    pub fn new(field: &str, value: String) -> TriviaResult<Self> {
        if value.trim().is_empty() {
            return Err(TriviaError::invalid_request(format!(
                "Field '{}' must not be empty",
                field
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// One page of an ordered collection, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: usize,
    size: usize,
}

impl Page {
    pub const DEFAULT_NUMBER: usize = 1;
    pub const DEFAULT_SIZE: usize = 10;

    /// Validate a requested page. There is no upper bound on `number`:
    /// pages past the end are simply empty.
    pub fn new(number: i64, size: usize) -> TriviaResult<Self> {
        if number < 1 {
            return Err(TriviaError::invalid_request(format!(
                "Page must be a positive integer, got {}",
                number
            )));
        }
        if size == 0 {
            return Err(TriviaError::invalid_request("Page size must be positive"));
        }
        let number = usize::try_from(number).unwrap_or(usize::MAX);
        Ok(Self { number, size })
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Index range of this page within a collection of `len` items,
    /// clamped so that out-of-range pages yield an empty range
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = (self.number - 1).saturating_mul(self.size).min(len);
        let end = start.saturating_add(self.size).min(len);
        start..end
    }
}

/// Case-insensitive substring to look for in question text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// A missing or empty term is rejected rather than matching everything
    pub fn new(term: Option<String>) -> TriviaResult<Self> {
        match term {
            Some(raw) if !raw.is_empty() => {
                let folded = raw.to_lowercase();
                Ok(Self { raw, folded })
            }
            _ => Err(TriviaError::invalid_request("Search term is required")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }
}

/// Category constraint for a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Specific(CategoryId),
}

impl QuizCategory {
    pub fn admits(&self, category: CategoryId) -> bool {
        match self {
            QuizCategory::All => true,
            QuizCategory::Specific(id) => *id == category,
        }
    }
}

/// Questions already shown in the current quiz
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizHistory(HashSet<QuestionId>);

impl QuizHistory {
    pub fn contains(&self, id: QuestionId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<QuestionId> for QuizHistory {
    fn from_iter<I: IntoIterator<Item = QuestionId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text() {
        assert!(NonEmptyText::new("question", "Who?".into()).is_ok());
        assert!(NonEmptyText::new("question", "".into()).is_err());
        assert!(NonEmptyText::new("answer", "   ".into()).is_err());
    }

    #[test]
    fn test_page_validation() {
        assert!(Page::new(1, 10).is_ok());
        assert!(Page::new(i64::MAX, 10).is_ok());
        assert!(Page::new(0, 10).is_err());
        assert!(Page::new(-3, 10).is_err());
        assert!(Page::new(1, 0).is_err());
    }

    #[test]
    fn test_page_range() {
        let page = Page::new(3, 10).unwrap();
        assert_eq!(page.range(25), 20..25);

        let page = Page::new(100, 10).unwrap();
        assert!(page.range(25).is_empty());

        let page = Page::new(i64::MAX, 10).unwrap();
        assert!(page.range(25).is_empty());
    }

    #[test]
    fn test_search_term_rejects_empty() {
        assert!(SearchTerm::new(None).is_err());
        assert!(SearchTerm::new(Some(String::new())).is_err());
    }

    #[test]
    fn test_search_term_case_insensitive() {
        let term = SearchTerm::new(Some("TiTlE".into())).unwrap();
        assert!(term.matches("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?"));
        assert!(term.matches("TITLE"));
        assert!(!term.matches("What boxer's original name is Cassius Clay?"));
    }

    #[test]
    fn test_quiz_category_admits() {
        let science = CategoryId::from_raw(1);
        let art = CategoryId::from_raw(2);
        assert!(QuizCategory::All.admits(science));
        assert!(QuizCategory::Specific(science).admits(science));
        assert!(!QuizCategory::Specific(science).admits(art));
    }

    #[test]
    fn test_history_tolerates_duplicates() {
        let history: QuizHistory = [1, 2, 2, 3]
            .into_iter()
            .map(QuestionId::from_raw)
            .collect();
        assert_eq!(history.len(), 3);
        assert!(history.contains(QuestionId::from_raw(2)));
        assert!(!history.contains(QuestionId::from_raw(4)));
    }
}
