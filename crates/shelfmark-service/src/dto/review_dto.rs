//! Review-rating DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelfmark_core::{BookId, ReviewId, SubjectId};
use validator::Validate;

/// Request to add a review for a book.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i32,

    #[validate(length(max = 1000, message = "Review cannot exceed 1000 characters"))]
    pub review_text: String,

    pub book_id: BookId,
}

/// Review response DTO with reviewer and book names resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub score: i32,
    pub review_text: String,
    pub book_id: BookId,
    pub book_title: Option<String>,
    pub user_id: SubjectId,
    pub user_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_request_score_range() {
        let request = ReviewRequest {
            score: 5,
            review_text: "Great read".to_string(),
            book_id: BookId::new(),
        };
        assert!(request.validate().is_ok());

        let request = ReviewRequest {
            score: 6,
            review_text: String::new(),
            book_id: BookId::new(),
        };
        assert!(request.validate().is_err());
    }
}
