//! Review-rating service.

use crate::dto::{ReviewRequest, ReviewResponse};
use shelfmark_core::{Book, BookId, ReviewRating, ShelfmarkResult, SubjectId, User, ValidateExt};
use shelfmark_repository::{BookCondition, Repository, ReviewCondition, UnitOfWork, UserCondition};
use std::sync::Arc;
use tracing::{debug, info};

/// Service for book reviews and aggregate ratings.
pub struct ReviewRatingService<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReviewRatingService<U> {
    /// Creates a new review service.
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// All reviews for one book, with reviewer and book names resolved.
    pub async fn reviews_for_book(&self, book_id: BookId) -> ShelfmarkResult<Vec<ReviewResponse>> {
        debug!("Listing reviews for book: {}", book_id);

        let reviews = self
            .uow
            .repository::<ReviewRating>()
            .get_by_condition(ReviewCondition::ByBook(book_id))
            .await?;

        let book_title = self
            .uow
            .repository::<Book>()
            .get_first(BookCondition::ById(book_id))
            .await?
            .map(|b| b.title);

        let mut responses = Vec::with_capacity(reviews.len());
        for review in reviews {
            let user_name = self
                .uow
                .repository::<User>()
                .get_first(UserCondition::ById(review.user_id.clone()))
                .await?
                .map(|u| u.user_name);

            responses.push(ReviewResponse {
                id: review.id,
                score: review.score,
                review_text: review.review_text,
                book_id: review.book_id,
                book_title: book_title.clone(),
                user_id: review.user_id,
                user_name,
                created_at: review.created_at,
            });
        }
        Ok(responses)
    }

    /// Records a review on behalf of the authenticated user.
    pub async fn add_review(
        &self,
        request: ReviewRequest,
        user_id: SubjectId,
    ) -> ShelfmarkResult<ReviewResponse> {
        debug!("Adding review for book: {}", request.book_id);
        request.validate_request()?;

        let review = ReviewRating::new(
            request.score,
            request.review_text,
            request.book_id,
            user_id,
        );
        self.uow.repository::<ReviewRating>().create(review.clone());
        self.uow.commit().await?;

        info!("Review added: {} for book {}", review.id, review.book_id);
        Ok(ReviewResponse {
            id: review.id,
            score: review.score,
            review_text: review.review_text,
            book_id: review.book_id,
            book_title: None,
            user_id: review.user_id,
            user_name: None,
            created_at: review.created_at,
        })
    }

    /// Arithmetic mean of all scores for the book; exactly `0.0` when the
    /// book has no reviews.
    pub async fn average_rating(&self, book_id: BookId) -> ShelfmarkResult<f64> {
        debug!("Computing average rating for book: {}", book_id);

        let reviews = self
            .uow
            .repository::<ReviewRating>()
            .get_by_condition(ReviewCondition::ByBook(book_id))
            .await?;

        if reviews.is_empty() {
            return Ok(0.0);
        }

        let total: i64 = reviews.iter().map(|r| i64::from(r.score)).sum();
        Ok(total as f64 / reviews.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfmark_core::{Category, ShelfmarkError};
    use shelfmark_repository::MemoryUnitOfWork;

    fn seeded_book(uow: &MemoryUnitOfWork) -> Book {
        let category = Category::new("Fiction".to_string(), String::new());
        let book = Book::new(
            "Dune".to_string(),
            "9780441013593".to_string(),
            String::new(),
            chrono::Utc::now(),
            None,
            category.id,
            None,
            None,
        );
        uow.store().seed(vec![category]);
        uow.store().seed(vec![book.clone()]);
        book
    }

    fn review_request(book_id: BookId, score: i32) -> ReviewRequest {
        ReviewRequest {
            score,
            review_text: "Worth reading".to_string(),
            book_id,
        }
    }

    #[tokio::test]
    async fn test_average_of_no_reviews_is_zero() {
        let service = ReviewRatingService::new(Arc::new(MemoryUnitOfWork::new()));
        let average = service.average_rating(BookId::new()).await.unwrap();
        assert_eq!(average, 0.0);
    }

    #[tokio::test]
    async fn test_average_is_arithmetic_mean() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let book = seeded_book(&uow);
        let service = ReviewRatingService::new(uow);

        service
            .add_review(review_request(book.id, 3), "auth0|alice".into())
            .await
            .unwrap();
        service
            .add_review(review_request(book.id, 5), "auth0|bob".into())
            .await
            .unwrap();

        let average = service.average_rating(book.id).await.unwrap();
        assert_eq!(average, 4.0);
    }

    #[tokio::test]
    async fn test_reviews_resolve_user_and_book_names() {
        let uow = Arc::new(MemoryUnitOfWork::new());
        let book = seeded_book(&uow);
        uow.store().seed(vec![User::new(
            "auth0|alice".into(),
            "alice".to_string(),
            None,
            None,
            None,
        )]);

        let service = ReviewRatingService::new(uow);
        service
            .add_review(review_request(book.id, 4), "auth0|alice".into())
            .await
            .unwrap();

        let reviews = service.reviews_for_book(book.id).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].book_title.as_deref(), Some("Dune"));
        assert_eq!(reviews[0].user_name.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_rejects_out_of_range_score() {
        let service = ReviewRatingService::new(Arc::new(MemoryUnitOfWork::new()));
        let result = service
            .add_review(review_request(BookId::new(), 0), "auth0|alice".into())
            .await;
        assert!(matches!(result, Err(ShelfmarkError::Validation(_))));
    }
}
