//! Review-rating entity.

use crate::{BookId, ReviewId, SubjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's review and score for a book.
///
/// The score is expected to be in the 1–5 range; the range is not enforced
/// at this layer. Both the book and the user references are restrict-delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ReviewRating {
    pub id: ReviewId,
    pub score: i32,
    pub review_text: String,
    pub book_id: BookId,
    pub user_id: SubjectId,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReviewRating {
    /// Creates a new review record.
    #[must_use]
    pub fn new(score: i32, review_text: String, book_id: BookId, user_id: SubjectId) -> Self {
        Self {
            id: ReviewId::new(),
            score,
            review_text,
            book_id,
            user_id,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}
