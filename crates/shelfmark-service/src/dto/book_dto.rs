//! Book DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelfmark_core::rules::valid_isbn;
use shelfmark_core::{AuthorId, Book, BookId, CategoryId, PublisherId};
use validator::Validate;

/// Request to create or update a book.
///
/// `cover_image_url` carries the URL returned by the image host after
/// upload; on update, `None` keeps the stored URL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookRequest {
    #[validate(length(min = 2, max = 200, message = "Title must be 2-200 characters"))]
    pub title: String,

    #[validate(custom(function = valid_isbn, message = "Invalid ISBN"))]
    pub isbn: String,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    pub description: String,

    pub published_date: DateTime<Utc>,

    pub cover_image_url: Option<String>,

    pub category_id: CategoryId,

    pub author_id: Option<AuthorId>,

    pub publisher_id: Option<PublisherId>,
}

/// Book response DTO with denormalized reference names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub isbn: String,
    pub description: String,
    pub published_date: DateTime<Utc>,
    pub cover_image_url: Option<String>,
    pub category_id: CategoryId,
    pub category_name: Option<String>,
    pub author_id: Option<AuthorId>,
    pub author_name: Option<String>,
    pub publisher_id: Option<PublisherId>,
    pub publisher_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BookResponse {
    /// Builds the response from the entity plus the resolved reference
    /// names (absent references stay `None`).
    #[must_use]
    pub fn from_book(
        book: Book,
        category_name: Option<String>,
        author_name: Option<String>,
        publisher_name: Option<String>,
    ) -> Self {
        Self {
            id: book.id,
            title: book.title,
            isbn: book.isbn,
            description: book.description,
            published_date: book.published_date,
            cover_image_url: book.cover_image_url,
            category_id: book.category_id,
            category_name,
            author_id: book.author_id,
            author_name,
            publisher_id: book.publisher_id,
            publisher_name,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> BookRequest {
        BookRequest {
            title: "Dune".to_string(),
            isbn: "9780441013593".to_string(),
            description: "Desert planet epic".to_string(),
            published_date: Utc::now(),
            cover_image_url: None,
            category_id: CategoryId::new(),
            author_id: None,
            publisher_id: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_isbn() {
        let mut request = sample_request();
        request.isbn = "12345".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_short_title() {
        let mut request = sample_request();
        request.title = "D".to_string();
        assert!(request.validate().is_err());
    }
}
