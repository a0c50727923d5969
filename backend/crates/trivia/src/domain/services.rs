//! Domain Services
//!
//! Pure selection logic over question sets fetched from storage.
//! Callers pass questions in ascending id order; every function here keeps
//! that order.

use kernel::id::CategoryId;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::entities::Question;
use crate::domain::value_objects::{Page, QuizCategory, QuizHistory, SearchTerm};

/// Slice one page out of an ordered collection
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    &items[page.range(items.len())]
}

/// Questions whose text contains `term`, ignoring case
pub fn search(items: Vec<Question>, term: &SearchTerm) -> Vec<Question> {
    items
        .into_iter()
        .filter(|q| term.matches(&q.question))
        .collect()
}

/// Questions belonging to `category`
pub fn by_category(items: Vec<Question>, category: CategoryId) -> Vec<Question> {
    items.into_iter().filter(|q| q.category == category).collect()
}

/// Questions eligible for the next quiz round
pub fn quiz_candidates<'a>(
    items: &'a [Question],
    category: QuizCategory,
    history: &QuizHistory,
) -> Vec<&'a Question> {
    items
        .iter()
        .filter(|q| category.admits(q.category) && !history.contains(q.id))
        .collect()
}

/// Pick the next quiz question uniformly among the candidates.
///
/// Returns `None` once every admitted question is in the history.
pub fn select_quiz_question<R>(
    items: &[Question],
    category: QuizCategory,
    history: &QuizHistory,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let candidates = quiz_candidates(items, category, history);
    candidates.choose(rng).map(|q| (*q).clone())
}
